//! Side bets driven by recorded events: Arnies, Trouble, Dots and
//! Closest-to-Pin.

use crate::domain::{
    ArniesConfig, ClosestToPinConfig, DotsConfig, ModeTag, PlayerId, TroubleConfig, HOLES,
};
use std::collections::{BTreeMap, BTreeSet};

use crate::engine::{Ledger, ModeResult, RoundView};

fn par_or_better(view: &RoundView<'_>, player: &PlayerId, hole: usize) -> bool {
    view.gross(player, hole)
        .map_or(false, |g| g <= view.par(hole))
}

fn recorded(events: &BTreeMap<usize, BTreeSet<PlayerId>>, hole: usize, player: &PlayerId) -> bool {
    events.get(&hole).map_or(false, |set| set.contains(player))
}

/// A par on a par 4 or 5 without hitting the fairway. Each qualifier
/// collects from everyone else.
pub fn evaluate_arnies(
    config: &ArniesConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Arnies, participants);
    for (&hole, qualifiers) in view.aux.arnies.range(..HOLES) {
        if view.par(hole) < 4 {
            continue;
        }
        for player in qualifiers {
            if ledger.is_participant(player) && par_or_better(view, player, hole) {
                ledger.collect_from_each(player, config.bet);
            }
        }
    }
    ledger.into_result()
}

pub fn evaluate_trouble(
    config: &TroubleConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Trouble, participants);
    for (_, by_player) in view.aux.trouble.range(..HOLES) {
        for (player, kinds) in by_player {
            for kind in kinds {
                ledger.pay_each(player, config.value_of(*kind));
            }
        }
    }
    ledger.into_result()
}

/// Dots earned on one hole.
pub fn dots_on(config: &DotsConfig, view: &RoundView<'_>, player: &PlayerId, hole: usize) -> i64 {
    let Some(gross) = view.gross(player, hole) else {
        return 0;
    };
    let par = view.par(hole);
    let mut dots = match gross - par {
        d if d <= -2 => config.eagle,
        -1 => config.birdie,
        _ => 0,
    };
    if gross <= par {
        if recorded(&view.aux.sandies, hole, player) {
            dots += config.sandy;
        }
        if par == 3 && recorded(&view.aux.greenies, hole, player) {
            dots += config.greenie;
        }
    }
    dots
}

pub fn evaluate_dots(config: &DotsConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Dots, participants);
    let points: BTreeMap<PlayerId, i64> = participants
        .iter()
        .map(|p| (p.clone(), (0..HOLES).map(|h| dots_on(config, view, p, h)).sum()))
        .collect();
    ledger.settle_points(&points, config.bet_per_dot);
    ledger.into_result()
}

pub fn evaluate_closest_to_pin(
    config: &ClosestToPinConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::ClosestToPin, participants);
    for (&hole, winner) in view.aux.closest_to_pin.range(..HOLES) {
        if view.par(hole) != 3 {
            continue;
        }
        if config.must_make_par && !par_or_better(view, winner, hole) {
            continue;
        }
        ledger.collect_from_each(winner, config.bet);
    }
    ledger.into_result()
}
