//! Scotch (six-point): per-hole categories shared between two teams.
//!
//! Low ball and low team total are worth two points each, closest to the pin
//! and a birdie only one team made are worth one. Tied categories award
//! nothing. When low ball is decided and one team takes every point awarded on
//! the hole, the hole counts double.

use crate::domain::{ModeTag, PlayerId, ScotchConfig, HOLES};
use std::cmp::Ordering;

use super::valid_teams;
use crate::engine::match_play::Side;
use crate::engine::{Ledger, ModeResult, RoundView};

const LOW_BALL: i64 = 2;
const LOW_TOTAL: i64 = 2;
const PROXIMITY: i64 = 1;
const BIRDIE: i64 = 1;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HolePoints {
    pub a: i64,
    pub b: i64,
}

impl HolePoints {
    fn award(&mut self, side: Option<Side>, points: i64) {
        match side {
            Some(Side::A) => self.a += points,
            Some(Side::B) => self.b += points,
            None => {}
        }
    }
}

fn lower(a: i32, b: i32) -> Option<Side> {
    match a.cmp(&b) {
        Ordering::Less => Some(Side::A),
        Ordering::Greater => Some(Side::B),
        Ordering::Equal => None,
    }
}

fn team_scores(
    team: &[PlayerId],
    view: &RoundView<'_>,
    hole: usize,
    use_handicap: bool,
) -> Option<Vec<i32>> {
    team.iter()
        .map(|p| view.score(p, hole, use_handicap))
        .collect()
}

/// Points each team earns on `hole`, doubled on a sweep. `None` until every
/// player on both teams has a score.
pub fn hole_points(config: &ScotchConfig, view: &RoundView<'_>, hole: usize) -> Option<HolePoints> {
    let a = team_scores(&config.team_a, view, hole, config.use_handicap)?;
    let b = team_scores(&config.team_b, view, hole, config.use_handicap)?;
    let par = view.par(hole);
    let mut points = HolePoints::default();

    let low_ball = lower(*a.iter().min()?, *b.iter().min()?);
    let low_total = lower(a.iter().sum(), b.iter().sum());
    points.award(low_ball, LOW_BALL);
    points.award(low_total, LOW_TOTAL);

    if let Some(closest) = view.aux.closest_to_pin.get(&hole) {
        if config.team_a.contains(closest) {
            points.award(Some(Side::A), PROXIMITY);
        } else if config.team_b.contains(closest) {
            points.award(Some(Side::B), PROXIMITY);
        }
    }

    let birdie_a = a.iter().any(|&s| s < par);
    let birdie_b = b.iter().any(|&s| s < par);
    match (birdie_a, birdie_b) {
        (true, false) => points.award(Some(Side::A), BIRDIE),
        (false, true) => points.award(Some(Side::B), BIRDIE),
        _ => {}
    }

    let swept = low_ball.is_some() && (points.a == 0 || points.b == 0);
    if swept {
        points.a *= 2;
        points.b *= 2;
    }
    Some(points)
}

pub fn evaluate(config: &ScotchConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Scotch, participants);
    if !valid_teams(&config.team_a, &config.team_b, participants) {
        return ledger.into_result();
    }

    for hole in 0..HOLES {
        let Some(points) = hole_points(config, view, hole) else {
            continue;
        };
        let diff = points.a - points.b;
        let stake = config
            .bet_per_point
            .times(diff.abs() * view.hammer(ModeTag::Scotch, hole));
        if diff > 0 {
            ledger.settle_sides(&config.team_a, &config.team_b, stake);
        } else if diff < 0 {
            ledger.settle_sides(&config.team_b, &config.team_a, stake);
        }
    }
    ledger.into_result()
}
