//! Nassau and Head-to-Head: pairwise matches, each with its own presses.
//!
//! Nassau is three independent bets per pair (front, back, overall).
//! Head-to-Head is the single 18-hole bet. Both settle through `Contest`, so
//! match and stroke format, hammers and presses behave identically.

use crate::domain::{
    HeadToHeadConfig, ModeTag, Money, NassauConfig, PlayerId, BACK_NINE, FRONT_NINE, FULL_ROUND,
};
use std::ops::RangeInclusive;
use std::slice;

use super::pairs;
use crate::engine::{Contest, Ledger, ModeResult, RoundView};

pub fn evaluate_nassau(
    config: &NassauConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let segments: [(RangeInclusive<usize>, Money); 3] = [
        (FRONT_NINE, config.front),
        (BACK_NINE, config.back),
        (FULL_ROUND, config.overall),
    ];

    let mut ledger = Ledger::new(ModeTag::Nassau, participants);
    for (a, b) in pairs(participants) {
        let contest = Contest {
            mode: ModeTag::Nassau,
            side_a: slice::from_ref(a),
            side_b: slice::from_ref(b),
            format: config.format,
            use_handicap: config.use_handicap,
        };
        for (range, bet) in &segments {
            contest.settle(&mut ledger, view, range.clone(), *bet);
        }
        contest.settle_presses(&mut ledger, view, view.aux.presses_for(ModeTag::Nassau));
    }
    ledger.into_result()
}

pub fn evaluate_head_to_head(
    config: &HeadToHeadConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::HeadToHead, participants);
    for (a, b) in pairs(participants) {
        let contest = Contest {
            mode: ModeTag::HeadToHead,
            side_a: slice::from_ref(a),
            side_b: slice::from_ref(b),
            format: config.format,
            use_handicap: config.use_handicap,
        };
        contest.settle(&mut ledger, view, FULL_ROUND, config.bet);
        contest.settle_presses(&mut ledger, view, view.aux.presses_for(ModeTag::HeadToHead));
    }
    ledger.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuxState, HammerCall, MatchFormat, PressMatch, ScoreMatrix};
    use crate::engine::modes::testing::{ids, m, scratch};

    fn nassau(format: MatchFormat) -> NassauConfig {
        NassauConfig {
            front: m(5),
            back: m(5),
            overall: m(10),
            format,
            use_handicap: false,
            auto_press: false,
            press_trigger: 2,
        }
    }

    fn h2h() -> HeadToHeadConfig {
        HeadToHeadConfig {
            bet: m(10),
            format: MatchFormat::Match,
            use_handicap: false,
            auto_press: false,
            press_trigger: 2,
        }
    }

    #[test]
    fn test_front_nine_closed_out_early() {
        let players = scratch(&["a", "b"]);
        let ps = ids(&["a", "b"]);
        // a wins the first five holes: 5 up with 4 to play on the front.
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[3, 3, 2, 4, 3])
            .with_row(&ps[1], &[4, 4, 3, 5, 4]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);

        let r = evaluate_nassau(&nassau(MatchFormat::Match), &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(5));
        assert_eq!(r.amount(&ps[1]), m(-5));
    }

    #[test]
    fn test_full_round_all_three_bets() {
        let players = scratch(&["a", "b"]);
        let ps = ids(&["a", "b"]);
        // a wins hole 0 only; b wins hole 9 and 10.
        let mut a_row = [4_u8; 18];
        let mut b_row = [4_u8; 18];
        a_row[0] = 3;
        b_row[9] = 3;
        b_row[10] = 3;
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &a_row)
            .with_row(&ps[1], &b_row);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);

        let r = evaluate_nassau(&nassau(MatchFormat::Match), &ps, &view);
        // a takes the front (5), b the back (5) and the overall (10).
        assert_eq!(r.amount(&ps[0]), m(-10));
        assert_eq!(r.amount(&ps[1]), m(10));
    }

    #[test]
    fn test_stroke_format_waits_for_segment() {
        let players = scratch(&["a", "b"]);
        let ps = ids(&["a", "b"]);
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[4; 9])
            .with_row(&ps[1], &[5; 8]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);

        let pending = evaluate_nassau(&nassau(MatchFormat::Stroke), &ps, &view);
        assert!(pending.net.values().all(|v| v.is_zero()));

        let done = ScoreMatrix::default()
            .with_row(&ps[0], &[4; 9])
            .with_row(&ps[1], &[5; 9]);
        let view = RoundView::new(&players, &done, &aux);
        let r = evaluate_nassau(&nassau(MatchFormat::Stroke), &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(5));
    }

    #[test]
    fn test_press_is_an_independent_match() {
        let players = scratch(&["a", "b"]);
        let ps = ids(&["a", "b"]);
        // b wins holes 0 and 1, a wins holes 2..=8 for the front.
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[5, 5, 3, 3, 3, 3, 3, 3, 3])
            .with_row(&ps[1], &[4, 4, 4, 4, 4, 4, 4, 4, 4]);
        let aux = AuxState {
            presses: vec![PressMatch {
                start_hole: 2,
                end_hole: 8,
                mode: ModeTag::Nassau,
                bet: m(5),
                pair: Some([ps[0].clone(), ps[1].clone()]),
            }],
            ..Default::default()
        };
        let view = RoundView::new(&players, &scores, &aux);

        let r = evaluate_nassau(&nassau(MatchFormat::Match), &ps, &view);
        // Front won by a (5 up after 9, wins 5), press won by a (5).
        assert_eq!(r.amount(&ps[0]), m(10));
        assert!(r.total().is_zero());
    }

    #[test]
    fn test_head_to_head_hammer_weight() {
        let players = scratch(&["a", "b"]);
        let ps = ids(&["a", "b"]);
        let mut a_row = [4_u8; 18];
        let mut b_row = [4_u8; 18];
        a_row[0] = 3;
        b_row[1] = 3;
        b_row[2] = 3;
        a_row[3] = 3;
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &a_row)
            .with_row(&ps[1], &b_row);
        let aux = AuxState {
            hammers: vec![HammerCall {
                hole: 3,
                mode: ModeTag::HeadToHead,
                multiplier: 2,
            }],
            ..Default::default()
        };
        let view = RoundView::new(&players, &scores, &aux);

        // Without the hammer the match would be halved.
        let r = evaluate_head_to_head(&h2h(), &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(10));
    }

    #[test]
    fn test_head_to_head_every_pair() {
        let players = scratch(&["a", "b", "c"]);
        let ps = ids(&["a", "b", "c"]);
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[3; 18])
            .with_row(&ps[1], &[4; 18])
            .with_row(&ps[2], &[5; 18]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);

        let r = evaluate_head_to_head(&h2h(), &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(20));
        assert_eq!(r.amount(&ps[1]), m(0));
        assert_eq!(r.amount(&ps[2]), m(-20));
    }
}
