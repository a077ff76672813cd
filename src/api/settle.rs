use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::api::{format_amounts, AppState, RoundSnapshot};
use crate::domain::{ModeTag, PlayerId, PressMatch};
use crate::engine::settle;
use crate::error::AppError;
use crate::orchestration::spawn_auto_presses;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleResponse {
    pub net: BTreeMap<PlayerId, String>,
    pub by_mode: BTreeMap<ModeTag, BTreeMap<PlayerId, String>>,
    /// Presses spawned by this call and included in the totals. The caller
    /// appends them to its aux state.
    pub presses: Vec<PressMatch>,
}

pub async fn post_settle(
    State(state): State<AppState>,
    Json(snapshot): Json<RoundSnapshot>,
) -> Result<Json<SettleResponse>, AppError> {
    snapshot.validate(&state.config)?;
    let RoundSnapshot { setup, scores, mut aux } = snapshot;

    let presses = if state.config.auto_press {
        spawn_auto_presses(&setup, &scores, &aux)
    } else {
        Vec::new()
    };
    aux.presses.extend(presses.iter().cloned());

    let result = settle(&setup, &scores, &aux);
    let scale = state.config.money_scale;

    Ok(Json(SettleResponse {
        net: format_amounts(&result.net, scale),
        by_mode: result
            .by_mode
            .iter()
            .map(|(tag, amounts)| (*tag, format_amounts(amounts, scale)))
            .collect(),
        presses,
    }))
}
