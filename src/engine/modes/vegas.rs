//! Vegas: each team's two scores read as a two-part number, low number wins.

use crate::domain::{ModeTag, PlayerId, VegasConfig, HOLES};

use super::valid_teams;
use crate::engine::{Ledger, ModeResult, RoundView};

/// Concatenate two whole numbers: `(4, 10)` reads as `410`.
pub fn concat(first: i32, second: i32) -> i64 {
    let second = i64::from(second.max(0));
    let mut shift = 10_i64;
    while second >= shift {
        shift *= 10;
    }
    i64::from(first) * shift + second
}

/// The team's number for one hole.
///
/// Low score first, unless both scores are over par or `flipped` is set.
pub fn team_number(scores: [i32; 2], par: i32, flipped: bool) -> i64 {
    let (low, high) = if scores[0] <= scores[1] {
        (scores[0], scores[1])
    } else {
        (scores[1], scores[0])
    };
    if flipped || low > par {
        concat(high, low)
    } else {
        concat(low, high)
    }
}

fn pair_scores(
    team: &[PlayerId],
    view: &RoundView<'_>,
    hole: usize,
    use_handicap: bool,
) -> Option<[i32; 2]> {
    match team {
        [x, y] => Some([
            view.score(x, hole, use_handicap)?,
            view.score(y, hole, use_handicap)?,
        ]),
        _ => None,
    }
}

pub fn evaluate(config: &VegasConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Vegas, participants);
    if !valid_teams(&config.team_a, &config.team_b, participants) || config.team_a.len() != 2 {
        return ledger.into_result();
    }

    for hole in 0..HOLES {
        let a = pair_scores(&config.team_a, view, hole, config.use_handicap);
        let b = pair_scores(&config.team_b, view, hole, config.use_handicap);
        let (Some(a), Some(b)) = (a, b) else { continue };
        let par = view.par(hole);

        let birdie = |s: [i32; 2]| config.flip_on_birdie && s.iter().any(|&x| x < par);
        let number_a = team_number(a, par, birdie(b));
        let number_b = team_number(b, par, birdie(a));

        let diff = number_a - number_b;
        let stake = config
            .bet_per_point
            .times(diff.abs() * view.hammer(ModeTag::Vegas, hole));
        if diff < 0 {
            ledger.settle_sides(&config.team_a, &config.team_b, stake);
        } else if diff > 0 {
            ledger.settle_sides(&config.team_b, &config.team_a, stake);
        }
    }
    ledger.into_result()
}
