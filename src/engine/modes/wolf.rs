//! Wolf: per hole, the wolf's side against everyone else.
//!
//! The side is the wolf plus an optional partner, taken from aux. Lower best
//! ball wins; every winner-loser pair moves `bet × multiplier × hammer`.
//! Holes without a usable choice, or not complete for every participant,
//! contribute nothing.

use crate::domain::{ModeTag, Money, PlayerId, WolfChoice, WolfConfig, HOLES};
use std::cmp::Ordering;

use crate::engine::{Ledger, ModeResult, RoundView};

/// The wolf's side and the rest of the field, when `choice` fits the
/// participants.
fn split_sides(choice: &WolfChoice, participants: &[PlayerId]) -> Option<(Vec<PlayerId>, Vec<PlayerId>)> {
    if !participants.contains(&choice.wolf) {
        return None;
    }
    let mut wolf_side = vec![choice.wolf.clone()];
    if let Some(partner) = &choice.partner {
        if partner == &choice.wolf || !participants.contains(partner) {
            return None;
        }
        wolf_side.push(partner.clone());
    }
    let others: Vec<PlayerId> = participants
        .iter()
        .filter(|p| !wolf_side.contains(p))
        .cloned()
        .collect();
    if others.is_empty() {
        return None;
    }
    Some((wolf_side, others))
}

/// Settle one hole into `ledger`. Returns false when the hole contributes
/// nothing.
pub fn settle_hole(
    ledger: &mut Ledger,
    config: &WolfConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
    hole: usize,
) -> bool {
    let Some(choice) = view.aux.wolf.get(&hole) else {
        return false;
    };
    let Some((wolf_side, others)) = split_sides(choice, participants) else {
        return false;
    };
    if !view.complete(participants, hole) {
        return false;
    }
    let (Some(wolf_best), Some(other_best)) = (
        view.best_ball(&wolf_side, hole, config.use_handicap),
        view.best_ball(&others, hole, config.use_handicap),
    ) else {
        return false;
    };

    let stake: Money = config
        .bet
        .times(choice.multiplier() * view.hammer(ModeTag::Wolf, hole));
    match wolf_best.cmp(&other_best) {
        Ordering::Less => ledger.settle_pairwise(&wolf_side, &others, stake),
        Ordering::Greater => ledger.settle_pairwise(&others, &wolf_side, stake),
        Ordering::Equal => {}
    }
    true
}

pub fn evaluate(config: &WolfConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    evaluate_through(config, participants, view, HOLES)
}

/// Wolf money from holes before `end`.
pub fn evaluate_through(
    config: &WolfConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
    end: usize,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Wolf, participants);
    if participants.len() >= 3 {
        for hole in 0..end.min(HOLES) {
            settle_hole(&mut ledger, config, participants, view, hole);
        }
    }
    ledger.into_result()
}
