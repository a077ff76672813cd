//! Pure settlement engine.
//!
//! Everything here is a function of the round snapshot it is handed:
//! no I/O, no clocks, no hidden state. The same inputs always produce the
//! same `CombinedResult`.

use crate::domain::{ModeTag, Money, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod aggregator;
pub mod context;
pub mod ledger;
pub mod match_play;
pub mod modes;
pub mod record;

pub use aggregator::{combine, settle};
pub use context::RoundView;
pub use ledger::Ledger;
pub use match_play::{Contest, HoleOutcome, MatchOutcome, Side};
pub use record::{HoleTracking, SettlementRecord, TrackingTable};

/// One mode's settlement: a net amount per participant, summing to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeResult {
    pub mode: ModeTag,
    pub net: BTreeMap<PlayerId, Money>,
}

impl ModeResult {
    pub fn empty(mode: ModeTag) -> Self {
        ModeResult {
            mode,
            net: BTreeMap::new(),
        }
    }

    /// Net for `player`, zero when they are not in this mode.
    pub fn amount(&self, player: &PlayerId) -> Money {
        self.net.get(player).copied().unwrap_or_default()
    }

    pub fn total(&self) -> Money {
        self.net.values().sum()
    }
}

/// Every active mode folded into one ledger.
///
/// `net` has an entry for every player in the setup; `by_mode` has one entry
/// per distinct mode tag (repeated tags are summed).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResult {
    pub net: BTreeMap<PlayerId, Money>,
    pub by_mode: BTreeMap<ModeTag, BTreeMap<PlayerId, Money>>,
}

impl CombinedResult {
    pub fn amount(&self, player: &PlayerId) -> Money {
        self.net.get(player).copied().unwrap_or_default()
    }

    pub fn mode_amount(&self, mode: ModeTag, player: &PlayerId) -> Money {
        self.by_mode
            .get(&mode)
            .and_then(|m| m.get(player))
            .copied()
            .unwrap_or_default()
    }

    pub fn total(&self) -> Money {
        self.net.values().sum()
    }
}
