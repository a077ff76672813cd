pub mod health;
pub mod presses;
pub mod record;
pub mod settle;
pub mod wolf;

use crate::config::Config;
use crate::domain::{AuxState, GameSetup, Money, PlayerId, ScoreMatrix};
use crate::error::AppError;
use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// The full round state every settlement endpoint receives.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub setup: GameSetup,
    #[serde(default)]
    pub scores: ScoreMatrix,
    #[serde(default)]
    pub aux: AuxState,
}

impl RoundSnapshot {
    /// Reject setups the engine should never see.
    pub fn validate(&self, config: &Config) -> Result<(), AppError> {
        self.setup
            .validate(config.max_players)
            .and_then(|()| self.setup.validate_aux(&self.aux))
            .map_err(|e| {
                tracing::warn!(error = %e, players = self.setup.players.len(), "Rejected setup");
                AppError::from(e)
            })
    }
}

/// Per-player amounts formatted for a response.
pub(crate) fn format_amounts(
    amounts: &BTreeMap<PlayerId, Money>,
    scale: u32,
) -> BTreeMap<PlayerId, String> {
    amounts
        .iter()
        .map(|(p, v)| (p.clone(), v.to_display_string(scale)))
        .collect()
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/settle", post(settle::post_settle))
        .route("/v1/presses", post(presses::post_presses))
        .route("/v1/wolf/assignment", post(wolf::post_wolf_assignment))
        .route("/v1/record", post(record::post_record))
        .layer(cors)
        .with_state(state)
}
