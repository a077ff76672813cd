//! The mode registry: one evaluator per `ModeConfig` variant.
//!
//! Every evaluator has the same shape,
//! `(config, participants, view) -> ModeResult`, never fails, and only
//! settles what the recorded data supports.

use crate::domain::{ModeConfig, PlayerId};
use std::collections::BTreeSet;

use super::{ModeResult, RoundView};

pub mod aces_deuces;
pub mod banker;
pub mod best_ball;
pub mod bingo_bango_bongo;
pub mod junk;
pub mod nassau;
pub mod nines;
pub mod points;
pub mod rabbit;
pub mod scotch;
pub mod skins;
pub mod snake;
pub mod tax_man;
pub mod vegas;
pub mod wolf;

#[cfg(test)]
pub(crate) mod testing;

/// Dispatch to the evaluator for `config`'s variant.
pub fn evaluate(config: &ModeConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    match config {
        ModeConfig::Skins(c) => skins::evaluate(c, participants, view),
        ModeConfig::Nassau(c) => nassau::evaluate_nassau(c, participants, view),
        ModeConfig::HeadToHead(c) => nassau::evaluate_head_to_head(c, participants, view),
        ModeConfig::BestBall(c) => best_ball::evaluate(c, participants, view),
        ModeConfig::Vegas(c) => vegas::evaluate(c, participants, view),
        ModeConfig::Scotch(c) => scotch::evaluate(c, participants, view),
        ModeConfig::Nines(c) => nines::evaluate(c, participants, view),
        ModeConfig::BingoBangoBongo(c) => bingo_bango_bongo::evaluate(c, participants, view),
        ModeConfig::Wolf(c) => wolf::evaluate(c, participants, view),
        ModeConfig::Banker(c) => banker::evaluate(c, participants, view),
        ModeConfig::Snake(c) => snake::evaluate(c, participants, view),
        ModeConfig::Rabbit(c) => rabbit::evaluate(c, participants, view),
        ModeConfig::Arnies(c) => junk::evaluate_arnies(c, participants, view),
        ModeConfig::Trouble(c) => junk::evaluate_trouble(c, participants, view),
        ModeConfig::Dots(c) => junk::evaluate_dots(c, participants, view),
        ModeConfig::ClosestToPin(c) => junk::evaluate_closest_to_pin(c, participants, view),
        ModeConfig::AcesAndDeuces(c) => aces_deuces::evaluate(c, participants, view),
        ModeConfig::TaxMan(c) => tax_man::evaluate(c, participants, view),
        ModeConfig::Stableford(c) => points::evaluate_stableford(c, participants, view),
        ModeConfig::Quota(c) => points::evaluate_quota(c, participants, view),
    }
}

/// Every unordered pair, in participant order.
pub(crate) fn pairs(participants: &[PlayerId]) -> impl Iterator<Item = (&PlayerId, &PlayerId)> {
    participants
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| participants[i + 1..].iter().map(move |b| (a, b)))
}

/// The single lowest score, if nobody ties it.
pub(crate) fn outright_winner<'p>(scores: &[(&'p PlayerId, i32)]) -> Option<&'p PlayerId> {
    let best = scores.iter().map(|(_, s)| *s).min()?;
    let mut at_best = scores.iter().filter(|(_, s)| *s == best);
    let (winner, _) = at_best.next()?;
    if at_best.next().is_some() {
        None
    } else {
        Some(*winner)
    }
}

/// Two non-empty, equal-size, disjoint rosters made only of participants.
pub(crate) fn valid_teams(a: &[PlayerId], b: &[PlayerId], participants: &[PlayerId]) -> bool {
    if a.is_empty() || a.len() != b.len() {
        return false;
    }
    let mut seen = BTreeSet::new();
    a.iter()
        .chain(b.iter())
        .all(|p| participants.contains(p) && seen.insert(p))
}

/// Scores of every participant on `hole`, only when all of them have one.
pub(crate) fn hole_scores<'p>(
    participants: &'p [PlayerId],
    view: &RoundView<'_>,
    hole: usize,
    use_handicap: bool,
) -> Option<Vec<(&'p PlayerId, i32)>> {
    participants
        .iter()
        .map(|p| view.score(p, hole, use_handicap).map(|s| (p, s)))
        .collect()
}
