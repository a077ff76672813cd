//! Banker: the hole's banker plays every other player head-to-head.

use crate::domain::{BankerConfig, ModeTag, PlayerId, HOLES};
use std::cmp::Ordering;

use crate::engine::{Ledger, ModeResult, RoundView};

pub fn evaluate(config: &BankerConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Banker, participants);

    for (&hole, choice) in view.aux.banker.range(..HOLES) {
        let banker = &choice.banker;
        if !ledger.is_participant(banker) {
            continue;
        }
        let Some(banker_score) = view.score(banker, hole, config.use_handicap) else {
            continue;
        };
        let stake = choice
            .bet_override
            .unwrap_or(config.bet)
            .times(view.hammer(ModeTag::Banker, hole));

        for player in participants.iter().filter(|p| *p != banker) {
            let Some(score) = view.score(player, hole, config.use_handicap) else {
                continue;
            };
            match score.cmp(&banker_score) {
                Ordering::Less => ledger.transfer(banker, player, stake),
                Ordering::Greater => ledger.transfer(player, banker, stake),
                Ordering::Equal => {}
            }
        }
    }
    ledger.into_result()
}
