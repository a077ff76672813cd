//! Manually recorded per-hole facts that some modes need beyond strokes.
//!
//! Every entry is keyed by a 0-based hole index. Entries for modes that are
//! not active are ignored.

use crate::domain::{ModeTag, Money, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How a wolf went alone. Only consulted when no partner was picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoloCall {
    /// Declared after seeing the other drives.
    #[default]
    AfterDrives,
    /// Declared before any other player teed off.
    BeforeOthersTee,
    /// Declared before the wolf's own tee shot.
    Blind,
}

/// The wolf's decision on one hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WolfChoice {
    pub wolf: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<PlayerId>,
    #[serde(default)]
    pub solo: SoloCall,
}

impl WolfChoice {
    pub fn partnered(wolf: PlayerId, partner: PlayerId) -> Self {
        WolfChoice {
            wolf,
            partner: Some(partner),
            solo: SoloCall::AfterDrives,
        }
    }

    pub fn lone(wolf: PlayerId, solo: SoloCall) -> Self {
        WolfChoice {
            wolf,
            partner: None,
            solo,
        }
    }

    /// Payout multiplier: 1 partnered, 2/3/4 for the solo calls.
    pub fn multiplier(&self) -> i64 {
        match (&self.partner, self.solo) {
            (Some(_), _) => 1,
            (None, SoloCall::AfterDrives) => 2,
            (None, SoloCall::BeforeOthersTee) => 3,
            (None, SoloCall::Blind) => 4,
        }
    }
}

/// The banker for one hole and an optional stake override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankerChoice {
    pub banker: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bet_override: Option<Money>,
}

/// Kinds of trouble a player can get into on a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TroubleKind {
    Water,
    OutOfBounds,
    Bunker,
    ThreePutt,
    Trees,
    LostBall,
    Whiff,
}

/// A side match spawned mid-round that only covers `start_hole..=end_hole`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressMatch {
    pub start_hole: usize,
    pub end_hole: usize,
    pub mode: ModeTag,
    pub bet: Money,
    /// The two players the press is between. `None` applies to every pair
    /// of the mode (and is the only form team matches use).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<[PlayerId; 2]>,
}

impl PressMatch {
    /// True when this press covers the match between `a` and `b`.
    pub fn covers_pair(&self, a: &PlayerId, b: &PlayerId) -> bool {
        match &self.pair {
            None => true,
            Some([x, y]) => (x == a && y == b) || (x == b && y == a),
        }
    }
}

/// A hammer thrown on a hole for one mode. The multiplier is the current
/// one; escalation is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HammerCall {
    pub hole: usize,
    pub mode: ModeTag,
    #[serde(default = "default_hammer_multiplier")]
    pub multiplier: u32,
}

fn default_hammer_multiplier() -> u32 {
    2
}

/// Bundle of every manually recorded fact, supplied whole on each call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuxState {
    pub wolf: BTreeMap<usize, WolfChoice>,
    /// Bingo, bango, bongo winners in that order.
    pub bingo_bango_bongo: BTreeMap<usize, Vec<PlayerId>>,
    /// Three-putters per hole, in the order they happened.
    pub three_putts: BTreeMap<usize, Vec<PlayerId>>,
    pub closest_to_pin: BTreeMap<usize, PlayerId>,
    pub trouble: BTreeMap<usize, BTreeMap<PlayerId, Vec<TroubleKind>>>,
    pub arnies: BTreeMap<usize, BTreeSet<PlayerId>>,
    pub banker: BTreeMap<usize, BankerChoice>,
    pub sandies: BTreeMap<usize, BTreeSet<PlayerId>>,
    pub greenies: BTreeMap<usize, BTreeSet<PlayerId>>,
    pub presses: Vec<PressMatch>,
    pub hammers: Vec<HammerCall>,
}

impl AuxState {
    /// Stake multiplier for `mode` on `hole`. 1 when no hammer is down or the
    /// mode ignores hammers.
    pub fn hammer_multiplier(&self, mode: ModeTag, hole: usize) -> i64 {
        if !mode.honors_hammer() {
            return 1;
        }
        self.hammers
            .iter()
            .filter(|h| h.mode == mode && h.hole == hole)
            .map(|h| i64::from(h.multiplier.max(1)))
            .max()
            .unwrap_or(1)
    }

    pub fn presses_for(&self, mode: ModeTag) -> impl Iterator<Item = &PressMatch> {
        self.presses.iter().filter(move |p| p.mode == mode)
    }
}
