use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Readiness plus the settings that change settlement output.
pub async fn ready(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "moneyScale": state.config.money_scale,
        "autoPress": state.config.auto_press,
        "maxPlayers": state.config.max_players,
    }))
}
