//! Best Ball: two teams, each hole counted with the team's lowest score.

use crate::domain::{BestBallConfig, MatchFormat, ModeTag, PlayerId, FULL_ROUND, HOLES};

use super::valid_teams;
use crate::engine::{Contest, Ledger, ModeResult, RoundView};

pub fn evaluate(
    config: &BestBallConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::BestBall, participants);
    if !valid_teams(&config.team_a, &config.team_b, participants) {
        return ledger.into_result();
    }

    match config.format {
        MatchFormat::Match => {
            let contest = Contest {
                mode: ModeTag::BestBall,
                side_a: &config.team_a,
                side_b: &config.team_b,
                format: MatchFormat::Match,
                use_handicap: config.use_handicap,
            };
            contest.settle(&mut ledger, view, FULL_ROUND, config.bet);
            contest.settle_presses(&mut ledger, view, view.aux.presses_for(ModeTag::BestBall));
        }
        MatchFormat::Stroke => {
            for hole in 0..HOLES {
                let a = view.best_ball(&config.team_a, hole, config.use_handicap);
                let b = view.best_ball(&config.team_b, hole, config.use_handicap);
                let (Some(a), Some(b)) = (a, b) else { continue };
                let diff = i64::from(a - b);
                let stake = config.bet.times(diff.abs() * view.hammer(ModeTag::BestBall, hole));
                if diff < 0 {
                    ledger.settle_sides(&config.team_a, &config.team_b, stake);
                } else if diff > 0 {
                    ledger.settle_sides(&config.team_b, &config.team_a, stake);
                }
            }
        }
    }
    ledger.into_result()
}
