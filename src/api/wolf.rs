use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{AppState, RoundSnapshot};
use crate::domain::{ModeConfig, PlayerId, HOLES};
use crate::error::AppError;
use crate::orchestration::wolf_assignment;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WolfAssignmentRequest {
    #[serde(flatten)]
    pub snapshot: RoundSnapshot,
    /// 0-based hole index.
    pub hole: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WolfAssignmentResponse {
    pub hole: usize,
    pub wolf: PlayerId,
}

pub async fn post_wolf_assignment(
    State(state): State<AppState>,
    Json(request): Json<WolfAssignmentRequest>,
) -> Result<Json<WolfAssignmentResponse>, AppError> {
    let WolfAssignmentRequest { snapshot, hole } = request;
    snapshot.validate(&state.config)?;

    if hole >= HOLES {
        return Err(AppError::BadRequest(format!(
            "hole must be between 0 and {}",
            HOLES - 1
        )));
    }
    if !snapshot
        .setup
        .modes
        .iter()
        .any(|m| matches!(m.config, ModeConfig::Wolf(_)))
    {
        return Err(AppError::NotFound("setup has no wolf mode".to_string()));
    }

    let wolf = wolf_assignment(&snapshot.setup, &snapshot.scores, &snapshot.aux, hole)
        .ok_or_else(|| AppError::Internal("no wolf could be assigned".to_string()))?;
    Ok(Json(WolfAssignmentResponse { hole, wolf }))
}
