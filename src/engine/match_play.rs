//! Match-play and press sub-engine.
//!
//! A contest is two equal sides (single players for pairwise modes, rosters
//! for team modes). Holes are walked in order and the walk stops at the first
//! hole that is not complete for both sides. A match is decided as soon as the
//! lead exceeds the holes remaining, or when its last hole is played.
//! Presses are just more contests over a sub-range at their own stake.

use crate::domain::{MatchFormat, ModeTag, Money, PlayerId, PressMatch, HOLES};
use std::ops::RangeInclusive;

use super::{Ledger, RoundView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    fn sign(&self) -> i64 {
        match self {
            Side::A => 1,
            Side::B => -1,
        }
    }
}

/// Result of a single hole. `winner: None` is a halve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleOutcome {
    pub winner: Option<Side>,
    /// Holes this result counts for (hammer multiplier).
    pub weight: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won(Side),
    Halved,
    /// Not decided yet. `lead` is positive when side A is up.
    InProgress { lead: i64 },
}

/// Lead after each settled hole, positive when side A is up. Stops at the
/// first incomplete hole or once the match is closed out.
pub fn lead_path<F>(range: RangeInclusive<usize>, mut hole: F) -> Vec<(usize, i64)>
where
    F: FnMut(usize) -> Option<HoleOutcome>,
{
    let end = *range.end();
    let mut lead = 0_i64;
    let mut path = Vec::new();
    for h in range {
        let Some(outcome) = hole(h) else { break };
        if let Some(side) = outcome.winner {
            lead += side.sign() * outcome.weight;
        }
        path.push((h, lead));
        if lead.abs() > (end - h) as i64 {
            break;
        }
    }
    path
}

/// Match-play outcome over `range`.
pub fn play_match<F>(range: RangeInclusive<usize>, hole: F) -> MatchOutcome
where
    F: FnMut(usize) -> Option<HoleOutcome>,
{
    let end = *range.end();
    let path = lead_path(range, hole);
    match path.last() {
        None => MatchOutcome::InProgress { lead: 0 },
        Some(&(h, lead)) if lead.abs() > (end - h) as i64 => {
            if lead > 0 {
                MatchOutcome::Won(Side::A)
            } else {
                MatchOutcome::Won(Side::B)
            }
        }
        Some(&(h, _)) if h == end => MatchOutcome::Halved,
        Some(&(_, lead)) => MatchOutcome::InProgress { lead },
    }
}

/// Stroke-play outcome over `range`: totals compared once every hole is in.
pub fn play_stroke<F>(range: RangeInclusive<usize>, mut scores: F) -> MatchOutcome
where
    F: FnMut(usize) -> Option<(i32, i32)>,
{
    let (mut total_a, mut total_b) = (0, 0);
    for h in range {
        let Some((a, b)) = scores(h) else {
            return MatchOutcome::InProgress { lead: 0 };
        };
        total_a += a;
        total_b += b;
    }
    match total_a.cmp(&total_b) {
        std::cmp::Ordering::Less => MatchOutcome::Won(Side::A),
        std::cmp::Ordering::Greater => MatchOutcome::Won(Side::B),
        std::cmp::Ordering::Equal => MatchOutcome::Halved,
    }
}

/// Lower score wins the hole.
pub fn compare_hole(a: Option<i32>, b: Option<i32>, weight: i64) -> Option<HoleOutcome> {
    let (a, b) = (a?, b?);
    let winner = match a.cmp(&b) {
        std::cmp::Ordering::Less => Some(Side::A),
        std::cmp::Ordering::Greater => Some(Side::B),
        std::cmp::Ordering::Equal => None,
    };
    Some(HoleOutcome { winner, weight })
}

/// True for a press range that lies inside the round.
pub fn valid_range(start: usize, end: usize) -> bool {
    start <= end && end < HOLES
}

/// Two sides playing one mode's match.
pub struct Contest<'a> {
    pub mode: ModeTag,
    pub side_a: &'a [PlayerId],
    pub side_b: &'a [PlayerId],
    pub format: MatchFormat,
    pub use_handicap: bool,
}

impl<'a> Contest<'a> {
    pub fn hole(&self, view: &RoundView<'_>, hole: usize) -> Option<HoleOutcome> {
        compare_hole(
            view.best_ball(self.side_a, hole, self.use_handicap),
            view.best_ball(self.side_b, hole, self.use_handicap),
            view.hammer(self.mode, hole),
        )
    }

    pub fn lead_path(&self, view: &RoundView<'_>, range: RangeInclusive<usize>) -> Vec<(usize, i64)> {
        lead_path(range, |h| self.hole(view, h))
    }

    pub fn outcome(&self, view: &RoundView<'_>, range: RangeInclusive<usize>) -> MatchOutcome {
        match self.format {
            MatchFormat::Match => play_match(range, |h| self.hole(view, h)),
            MatchFormat::Stroke => play_stroke(range, |h| {
                Some((
                    view.best_ball(self.side_a, h, self.use_handicap)?,
                    view.best_ball(self.side_b, h, self.use_handicap)?,
                ))
            }),
        }
    }

    /// Settle the match over `range` for `bet`. Undecided matches pay nothing.
    pub fn settle(
        &self,
        ledger: &mut Ledger,
        view: &RoundView<'_>,
        range: RangeInclusive<usize>,
        bet: Money,
    ) -> MatchOutcome {
        let outcome = self.outcome(view, range);
        match outcome {
            MatchOutcome::Won(Side::A) => ledger.settle_sides(self.side_a, self.side_b, bet),
            MatchOutcome::Won(Side::B) => ledger.settle_sides(self.side_b, self.side_a, bet),
            MatchOutcome::Halved | MatchOutcome::InProgress { .. } => {}
        }
        outcome
    }

    /// Settle every press of this mode that covers this contest, each as an
    /// independent match over its own range.
    pub fn settle_presses<'p, I>(&self, ledger: &mut Ledger, view: &RoundView<'_>, presses: I)
    where
        I: IntoIterator<Item = &'p PressMatch>,
    {
        for press in presses {
            if press.mode != self.mode || !valid_range(press.start_hole, press.end_hole) {
                continue;
            }
            if !self.covered_by(press) {
                continue;
            }
            self.settle(ledger, view, press.start_hole..=press.end_hole, press.bet);
        }
    }

    fn covered_by(&self, press: &PressMatch) -> bool {
        match (self.side_a, self.side_b) {
            ([a], [b]) => press.covers_pair(a, b),
            _ => press.pair.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(side: Side) -> Option<HoleOutcome> {
        Some(HoleOutcome {
            winner: Some(side),
            weight: 1,
        })
    }

    fn halve() -> Option<HoleOutcome> {
        Some(HoleOutcome {
            winner: None,
            weight: 1,
        })
    }

    #[test]
    fn test_closeout_before_last_hole() {
        // A wins the first five of nine: 5 up with 4 to play.
        let outcome = play_match(0..=8, |h| if h < 5 { win(Side::A) } else { halve() });
        assert_eq!(outcome, MatchOutcome::Won(Side::A));

        let path = lead_path(0..=8, |h| if h < 5 { win(Side::A) } else { halve() });
        assert_eq!(path.last(), Some(&(4, 5)));
    }

    #[test]
    fn test_dormie_is_not_closed_out() {
        // 4 up with 4 to play is dormie, not won.
        let outcome = play_match(0..=8, |h| if h < 4 { win(Side::A) } else { None });
        assert_eq!(outcome, MatchOutcome::InProgress { lead: 4 });
    }

    #[test]
    fn test_all_square_after_last_hole_is_halved() {
        let outcome = play_match(0..=1, |h| if h == 0 { win(Side::A) } else { win(Side::B) });
        assert_eq!(outcome, MatchOutcome::Halved);
    }

    #[test]
    fn test_one_up_on_last_hole_wins() {
        let outcome = play_match(0..=2, |h| if h == 2 { win(Side::B) } else { halve() });
        assert_eq!(outcome, MatchOutcome::Won(Side::B));
    }

    #[test]
    fn test_walk_stops_at_incomplete_hole() {
        let path = lead_path(0..=8, |h| match h {
            0 => win(Side::A),
            1 => None,
            _ => win(Side::A),
        });
        assert_eq!(path, vec![(0, 1)]);
    }

    #[test]
    fn test_hammer_weight_counts_double() {
        let path = lead_path(0..=8, |h| {
            if h == 0 {
                Some(HoleOutcome {
                    winner: Some(Side::B),
                    weight: 2,
                })
            } else {
                None
            }
        });
        assert_eq!(path, vec![(0, -2)]);
    }

    #[test]
    fn test_stroke_segment() {
        let outcome = play_stroke(0..=2, |_| Some((4, 5)));
        assert_eq!(outcome, MatchOutcome::Won(Side::A));

        let pending = play_stroke(0..=2, |h| if h == 2 { None } else { Some((4, 5)) });
        assert_eq!(pending, MatchOutcome::InProgress { lead: 0 });

        let halved = play_stroke(0..=1, |h| if h == 0 { Some((3, 4)) } else { Some((5, 4)) });
        assert_eq!(halved, MatchOutcome::Halved);
    }

    #[test]
    fn test_empty_range_is_in_progress() {
        assert_eq!(play_match(5..=4, |_| win(Side::A)), MatchOutcome::InProgress { lead: 0 });
        assert!(!valid_range(5, 4));
        assert!(!valid_range(10, 18));
        assert!(valid_range(13, 17));
    }
}
