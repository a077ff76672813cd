//! Nines: rank points per hole, settled against the per-player average.

use crate::domain::{Money, ModeTag, NinesConfig, PlayerId, HOLES};
use std::collections::BTreeMap;

use super::hole_scores;
use crate::engine::{Ledger, ModeResult, RoundView};

/// Points for rank `k` (0 = best) in a field of `n`: 5/3/1 for three
/// players, 6/4/2/0 for four.
fn rank_points(n: usize, k: usize) -> i64 {
    3 + (n as i64 - 1) - 2 * k as i64
}

/// Points per player for one hole. Tied players share the average of the
/// rank points they span.
pub fn hole_points<'p>(scores: &[(&'p PlayerId, i32)]) -> BTreeMap<&'p PlayerId, i64> {
    let n = scores.len();
    let mut sorted: Vec<(&PlayerId, i32)> = scores.to_vec();
    sorted.sort_by_key(|(_, s)| *s);

    let mut points = BTreeMap::new();
    let mut k = 0;
    while k < n {
        let score = sorted[k].1;
        let tied = sorted[k..].iter().take_while(|(_, s)| *s == score).count();
        let shared: i64 = (k..k + tied).map(|r| rank_points(n, r)).sum::<i64>() / tied as i64;
        for (player, _) in &sorted[k..k + tied] {
            points.insert(*player, shared);
        }
        k += tied;
    }
    points
}

pub fn evaluate(config: &NinesConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Nines, participants);
    if !(2..=4).contains(&participants.len()) {
        return ledger.into_result();
    }

    let mut totals: BTreeMap<PlayerId, i64> = BTreeMap::new();
    for hole in 0..HOLES {
        let Some(scores) = hole_scores(participants, view, hole, config.use_handicap) else {
            continue;
        };
        for (player, points) in hole_points(&scores) {
            *totals.entry(player.clone()).or_default() += points - 3;
        }
    }

    let targets: BTreeMap<PlayerId, Money> = totals
        .into_iter()
        .map(|(p, rel)| (p, config.bet_per_point.times(rel)))
        .collect();
    ledger.settle_balances(&targets);
    ledger.into_result()
}
