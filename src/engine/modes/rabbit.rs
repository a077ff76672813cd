//! Rabbit: an outright hole winner catches a loose rabbit or frees a held
//! one. Whoever holds it at the end of a segment collects.

use crate::domain::{ModeTag, PlayerId, RabbitConfig, BACK_NINE, FRONT_NINE, FULL_ROUND};
use std::ops::RangeInclusive;

use super::{hole_scores, outright_winner};
use crate::engine::{Ledger, ModeResult, RoundView};

/// Holder after walking `range`, stopping at the first incomplete hole.
pub fn holder_after<'p>(
    participants: &'p [PlayerId],
    view: &RoundView<'_>,
    range: RangeInclusive<usize>,
) -> Option<&'p PlayerId> {
    let mut holder: Option<&PlayerId> = None;
    for hole in range {
        let Some(scores) = hole_scores(participants, view, hole, false) else {
            break;
        };
        let Some(winner) = outright_winner(&scores) else {
            continue;
        };
        holder = match holder {
            None => Some(winner),
            Some(h) if h == winner => Some(h),
            Some(_) => None,
        };
    }
    holder
}

pub fn evaluate(config: &RabbitConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Rabbit, participants);
    let segments: Vec<RangeInclusive<usize>> = if config.per_nine {
        vec![FRONT_NINE, BACK_NINE]
    } else {
        vec![FULL_ROUND]
    };

    for range in segments {
        if let Some(holder) = holder_after(participants, view, range) {
            ledger.collect_from_each(holder, config.bet);
        }
    }
    ledger.into_result()
}
