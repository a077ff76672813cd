//! Settlement records: a finished (or in-progress) round's inputs bundled
//! with its result and a content fingerprint.

use crate::domain::{AuxState, GameSetup, PlayerId, ScoreMatrix};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{settle, CombinedResult};

/// Per-hole stats kept alongside scores. Not used by any mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleTracking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fairway_hit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_in_regulation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub putts: Option<u8>,
}

pub type TrackingTable = BTreeMap<PlayerId, BTreeMap<usize, HoleTracking>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRecord {
    pub setup: GameSetup,
    pub scores: ScoreMatrix,
    #[serde(default)]
    pub aux: AuxState,
    #[serde(default)]
    pub tracking: TrackingTable,
    pub result: CombinedResult,
    pub fingerprint: String,
}

/// Borrowed view of the hashed inputs, so the fingerprint never covers the
/// derived result.
#[derive(Serialize)]
struct Inputs<'a> {
    setup: &'a GameSetup,
    scores: &'a ScoreMatrix,
    aux: &'a AuxState,
    tracking: &'a TrackingTable,
}

impl Inputs<'_> {
    fn fingerprint(&self) -> Result<String, serde_json::Error> {
        use sha2::{Digest, Sha256};

        // Struct fields serialize in declaration order and every map is a
        // BTreeMap, so this encoding is canonical.
        let canonical = serde_json::to_vec(self)?;
        let hash = Sha256::digest(&canonical);
        Ok(format!("sha256:{}", hex::encode(hash)))
    }
}

impl SettlementRecord {
    /// Settle the inputs and seal them with a fingerprint.
    ///
    /// # Errors
    /// Fails only if the inputs cannot be serialized.
    pub fn capture(
        setup: GameSetup,
        scores: ScoreMatrix,
        aux: AuxState,
        tracking: TrackingTable,
    ) -> Result<Self, serde_json::Error> {
        let result = settle(&setup, &scores, &aux);
        let fingerprint = Inputs {
            setup: &setup,
            scores: &scores,
            aux: &aux,
            tracking: &tracking,
        }
        .fingerprint()?;
        Ok(SettlementRecord {
            setup,
            scores,
            aux,
            tracking,
            result,
            fingerprint,
        })
    }

    pub fn compute_fingerprint(&self) -> Result<String, serde_json::Error> {
        Inputs {
            setup: &self.setup,
            scores: &self.scores,
            aux: &self.aux,
            tracking: &self.tracking,
        }
        .fingerprint()
    }

    /// True when the stored fingerprint and result both match what the
    /// stored inputs produce today.
    pub fn verify(&self) -> Result<bool, serde_json::Error> {
        let fingerprint = self.compute_fingerprint()?;
        let result = settle(&self.setup, &self.scores, &self.aux);
        Ok(fingerprint == self.fingerprint && result == self.result)
    }
}
