//! Skins: unique low score on a hole takes the skin, ties carry.

use crate::domain::{ModeTag, PlayerId, SkinsConfig, HOLES};

use super::{hole_scores, outright_winner};
use crate::engine::{Ledger, ModeResult, RoundView};

pub fn evaluate(config: &SkinsConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Skins, participants);
    if participants.len() < 2 {
        return ledger.into_result();
    }

    let mut carried = 0_i64;
    for hole in 0..HOLES {
        let Some(scores) = hole_scores(participants, view, hole, config.use_handicap) else {
            break;
        };
        match outright_winner(&scores) {
            Some(winner) => {
                ledger.collect_from_each(winner, config.bet.times(1 + carried));
                carried = 0;
            }
            None if config.carryover => carried += 1,
            None => {}
        }
    }
    ledger.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuxState, ScoreMatrix};
    use crate::engine::modes::testing::{ids, m, scratch};

    fn config(carryover: bool) -> SkinsConfig {
        SkinsConfig {
            bet: m(1),
            use_handicap: false,
            carryover,
        }
    }

    #[test]
    fn test_tie_carries_into_next_skin() {
        let players = scratch(&["a", "b", "c"]);
        let ps = ids(&["a", "b", "c"]);
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[4, 4])
            .with_row(&ps[1], &[4, 5])
            .with_row(&ps[2], &[5, 5]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);

        let r = evaluate(&config(true), &ps, &view);
        // Hole 2 is worth two skins, taken from both opponents.
        assert_eq!(r.amount(&ps[0]), m(4));
        assert_eq!(r.amount(&ps[1]), m(-2));
        assert_eq!(r.amount(&ps[2]), m(-2));
        assert!(r.total().is_zero());
    }

    #[test]
    fn test_no_carryover_voids_tied_skin() {
        let players = scratch(&["a", "b"]);
        let ps = ids(&["a", "b"]);
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[4, 3])
            .with_row(&ps[1], &[4, 4]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);

        let r = evaluate(&config(false), &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(1));
        assert_eq!(r.amount(&ps[1]), m(-1));
    }

    #[test]
    fn test_stops_at_first_incomplete_hole() {
        let players = scratch(&["a", "b"]);
        let ps = ids(&["a", "b"]);
        let mut scores = ScoreMatrix::default().with_row(&ps[0], &[4, 3, 3]);
        scores.set(&ps[1], 0, 4);
        scores.set(&ps[1], 2, 5);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);

        // Hole 1 is missing for b, so hole 2 is not reached yet.
        let r = evaluate(&config(true), &ps, &view);
        assert!(r.net.values().all(|v| v.is_zero()));
    }

    #[test]
    fn test_single_player_settles_nothing() {
        let players = scratch(&["a"]);
        let ps = ids(&["a"]);
        let scores = ScoreMatrix::default().with_row(&ps[0], &[3]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);
        let r = evaluate(&config(true), &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(0));
    }
}
