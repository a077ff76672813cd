use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::{AppState, RoundSnapshot};
use crate::domain::PressMatch;
use crate::error::AppError;
use crate::orchestration::spawn_auto_presses;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PressesResponse {
    pub presses: Vec<PressMatch>,
}

/// Presses the caller should append. Runs regardless of `AUTO_PRESS`; each
/// mode's own `autoPress` flag still applies.
pub async fn post_presses(
    State(state): State<AppState>,
    Json(snapshot): Json<RoundSnapshot>,
) -> Result<Json<PressesResponse>, AppError> {
    snapshot.validate(&state.config)?;
    let presses = spawn_auto_presses(&snapshot.setup, &snapshot.scores, &snapshot.aux);
    Ok(Json(PressesResponse { presses }))
}
