pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use domain::{AuxState, GameSetup, ModeConfig, Money, Player, PlayerId, ScoreMatrix};
pub use engine::{combine, settle, CombinedResult, ModeResult, SettlementRecord};
pub use error::AppError;
pub use orchestration::{spawn_auto_presses, wolf_assignment, with_auto_presses};
