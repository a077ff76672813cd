//! Bingo-Bango-Bongo: one point each for first on, closest once all are on,
//! and first in. Winners come from aux only; each hole awards at most three
//! points to distinct players.

use crate::domain::{BingoBangoBongoConfig, ModeTag, PlayerId, HOLES};
use std::collections::BTreeMap;

use crate::engine::{Ledger, ModeResult, RoundView};

pub fn evaluate(
    config: &BingoBangoBongoConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::BingoBangoBongo, participants);
    let mut points: BTreeMap<PlayerId, i64> =
        participants.iter().map(|p| (p.clone(), 0)).collect();

    for (_, winners) in view.aux.bingo_bango_bongo.range(..HOLES) {
        let mut awarded: Vec<&PlayerId> = Vec::with_capacity(3);
        for winner in winners {
            if awarded.len() == 3 {
                break;
            }
            if awarded.contains(&winner) {
                continue;
            }
            awarded.push(winner);
            if let Some(p) = points.get_mut(winner) {
                *p += 1;
            }
        }
    }

    ledger.settle_points(&points, config.bet_per_point);
    ledger.into_result()
}
