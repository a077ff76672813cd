//! Domain types for the wager engine.
//!
//! This module provides:
//! - Exact money handling via the Money wrapper
//! - Domain primitives: PlayerId, ModeTag, hole ranges
//! - Round inputs: players, course, scores, aux state and mode setup
//! - Stable standings key for deterministic role assignment

pub mod aux_state;
pub mod decimal;
pub mod ordering;
pub mod player;
pub mod primitives;
pub mod scores;
pub mod setup;

pub use aux_state::{
    AuxState, BankerChoice, HammerCall, PressMatch, SoloCall, TroubleKind, WolfChoice,
};
pub use decimal::Money;
pub use ordering::{last_place, StandingKey};
pub use player::Player;
pub use primitives::{ModeTag, ParResult, PlayerId, BACK_NINE, FRONT_NINE, FULL_ROUND, HOLES};
pub use scores::{Course, ScoreMatrix};
pub use setup::{
    AcesAndDeucesConfig, ActiveMode, ArniesConfig, BankerConfig, BestBallConfig,
    BingoBangoBongoConfig, ClosestToPinConfig, DotsConfig, GameSetup, HeadToHeadConfig,
    LastPlaceTiebreak, MatchFormat, ModeConfig, NassauConfig, NinesConfig, QuotaConfig,
    RabbitConfig, ScotchConfig, SetupError, SkinsConfig, SnakeConfig, StablefordConfig,
    TaxManConfig, TroubleConfig, VegasConfig, WolfConfig, MAX_HAMMER, MAX_STAKE,
};
