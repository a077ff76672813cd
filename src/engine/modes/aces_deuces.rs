//! Aces & Deuces: the hole's best scores collect, the worst scores pay.

use crate::domain::{AcesAndDeucesConfig, ModeTag, PlayerId, HOLES};
use std::collections::BTreeSet;

use super::hole_scores;
use crate::engine::{Ledger, ModeResult, RoundView};

/// `(payer, payee)` charges for one hole, each pair at most once.
pub fn hole_charges<'p>(scores: &[(&'p PlayerId, i32)]) -> BTreeSet<(&'p PlayerId, &'p PlayerId)> {
    let mut charges = BTreeSet::new();
    let (Some(best), Some(worst)) = (
        scores.iter().map(|(_, s)| *s).min(),
        scores.iter().map(|(_, s)| *s).max(),
    ) else {
        return charges;
    };
    if best == worst {
        return charges;
    }

    for &(payer, score) in scores {
        for &(payee, other) in scores {
            let aced = other == best && score != best;
            let deuced = score == worst && other != worst;
            if aced || deuced {
                charges.insert((payer, payee));
            }
        }
    }
    charges
}

pub fn evaluate(
    config: &AcesAndDeucesConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::AcesAndDeuces, participants);
    for hole in 0..HOLES {
        let Some(scores) = hole_scores(participants, view, hole, false) else {
            continue;
        };
        for (payer, payee) in hole_charges(&scores) {
            ledger.transfer(payer, payee, config.bet);
        }
    }
    ledger.into_result()
}
