use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::{AppState, RoundSnapshot};
use crate::engine::{SettlementRecord, TrackingTable};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    #[serde(flatten)]
    pub snapshot: RoundSnapshot,
    #[serde(default)]
    pub tracking: TrackingTable,
}

/// Seal the round as it stands. The aux state is taken as given; no presses
/// are spawned here.
pub async fn post_record(
    State(state): State<AppState>,
    Json(request): Json<RecordRequest>,
) -> Result<Json<SettlementRecord>, AppError> {
    let RecordRequest { snapshot, tracking } = request;
    snapshot.validate(&state.config)?;

    let RoundSnapshot { setup, scores, aux } = snapshot;
    let record = SettlementRecord::capture(setup, scores, aux, tracking)?;
    tracing::info!(fingerprint = %record.fingerprint, "Settlement record captured");
    Ok(Json(record))
}
