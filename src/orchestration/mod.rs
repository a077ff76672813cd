//! Caller-side helpers that sit around the pure engine: they read a round
//! snapshot and produce new inputs (presses, wolf roles) for the next call.

pub mod presses;
pub mod wolf_order;

pub use presses::{spawn_auto_presses, with_auto_presses};
pub use wolf_order::{assign_wolf, wolf_assignment};
