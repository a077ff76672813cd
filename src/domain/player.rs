//! Player snapshot for the duration of a round.

use crate::domain::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A golfer in the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Course handicap. Negative values are plus handicaps.
    #[serde(default)]
    pub handicap: i32,
    /// Opaque payment handles keyed by service name. Never interpreted here.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub payment_handles: BTreeMap<String, String>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, handicap: i32) -> Self {
        Player {
            id: PlayerId::new(id),
            name: name.into(),
            handicap,
            payment_handles: BTreeMap::new(),
        }
    }

    pub fn with_payment_handle(mut self, service: impl Into<String>, handle: impl Into<String>) -> Self {
        self.payment_handles.insert(service.into(), handle.into());
        self
    }
}
