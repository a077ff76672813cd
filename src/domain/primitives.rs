//! Domain primitives: PlayerId, ModeTag, hole ranges.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of holes in a round.
pub const HOLES: usize = 18;

/// Front nine, 0-based inclusive.
pub const FRONT_NINE: RangeInclusive<usize> = 0..=8;

/// Back nine, 0-based inclusive.
pub const BACK_NINE: RangeInclusive<usize> = 9..=17;

/// Full round, 0-based inclusive.
pub const FULL_ROUND: RangeInclusive<usize> = 0..=17;

/// Stable player identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId(id.to_string())
    }
}

/// Identifier of a wagering game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeTag {
    Skins,
    Nassau,
    HeadToHead,
    BestBall,
    Vegas,
    Scotch,
    Nines,
    BingoBangoBongo,
    Wolf,
    Banker,
    Snake,
    Rabbit,
    Arnies,
    Trouble,
    Dots,
    ClosestToPin,
    AcesAndDeuces,
    TaxMan,
    Stableford,
    Quota,
}

impl ModeTag {
    pub const ALL: [ModeTag; 20] = [
        ModeTag::Skins,
        ModeTag::Nassau,
        ModeTag::HeadToHead,
        ModeTag::BestBall,
        ModeTag::Vegas,
        ModeTag::Scotch,
        ModeTag::Nines,
        ModeTag::BingoBangoBongo,
        ModeTag::Wolf,
        ModeTag::Banker,
        ModeTag::Snake,
        ModeTag::Rabbit,
        ModeTag::Arnies,
        ModeTag::Trouble,
        ModeTag::Dots,
        ModeTag::ClosestToPin,
        ModeTag::AcesAndDeuces,
        ModeTag::TaxMan,
        ModeTag::Stableford,
        ModeTag::Quota,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeTag::Skins => "skins",
            ModeTag::Nassau => "nassau",
            ModeTag::HeadToHead => "head_to_head",
            ModeTag::BestBall => "best_ball",
            ModeTag::Vegas => "vegas",
            ModeTag::Scotch => "scotch",
            ModeTag::Nines => "nines",
            ModeTag::BingoBangoBongo => "bingo_bango_bongo",
            ModeTag::Wolf => "wolf",
            ModeTag::Banker => "banker",
            ModeTag::Snake => "snake",
            ModeTag::Rabbit => "rabbit",
            ModeTag::Arnies => "arnies",
            ModeTag::Trouble => "trouble",
            ModeTag::Dots => "dots",
            ModeTag::ClosestToPin => "closest_to_pin",
            ModeTag::AcesAndDeuces => "aces_and_deuces",
            ModeTag::TaxMan => "tax_man",
            ModeTag::Stableford => "stableford",
            ModeTag::Quota => "quota",
        }
    }

    /// Whether a hammer call changes this mode's stakes.
    pub fn honors_hammer(&self) -> bool {
        matches!(
            self,
            ModeTag::Nassau
                | ModeTag::HeadToHead
                | ModeTag::BestBall
                | ModeTag::Vegas
                | ModeTag::Scotch
                | ModeTag::Wolf
                | ModeTag::Banker
        )
    }
}

impl std::fmt::Display for ModeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score relative to par, as golfers name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParResult {
    AlbatrossOrBetter,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogeyOrWorse,
}

impl ParResult {
    pub fn from_diff(strokes_minus_par: i32) -> Self {
        match strokes_minus_par {
            d if d <= -3 => ParResult::AlbatrossOrBetter,
            -2 => ParResult::Eagle,
            -1 => ParResult::Birdie,
            0 => ParResult::Par,
            1 => ParResult::Bogey,
            _ => ParResult::DoubleBogeyOrWorse,
        }
    }
}
