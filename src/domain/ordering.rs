//! Stable standings ordering for deterministic role assignment.

use crate::domain::{LastPlaceTiebreak, Money, PlayerId};

/// Ordering key for "who is in last place".
///
/// Ordering: net money ascending -> configured tie-break -> rotation position.
/// The smallest key is last place.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StandingKey {
    /// Net winnings so far (primary sort, lowest first).
    pub net: Money,
    /// Configured tie-break rank (lower picks first).
    pub tiebreak: i64,
    /// Position in the tee rotation (final fallback).
    pub rotation_pos: usize,
    pub player: PlayerId,
}

impl StandingKey {
    pub fn new(
        player: PlayerId,
        net: Money,
        rotation_pos: usize,
        handicap: i32,
        rule: LastPlaceTiebreak,
    ) -> Self {
        let tiebreak = match rule {
            LastPlaceTiebreak::RotationOrder => rotation_pos as i64,
            LastPlaceTiebreak::ReverseRotationOrder => -(rotation_pos as i64),
            LastPlaceTiebreak::HighestHandicap => -i64::from(handicap),
        };
        StandingKey {
            net,
            tiebreak,
            rotation_pos,
            player,
        }
    }
}

/// The player in last place, or `None` for an empty field.
pub fn last_place(keys: &[StandingKey]) -> Option<&PlayerId> {
    keys.iter().min().map(|k| &k.player)
}
