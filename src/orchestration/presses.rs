//! Automatic press spawning.
//!
//! The engine only settles presses it is handed. This is the caller-side
//! rule that decides when a press starts: whenever a match (the base match
//! or a press) has one side exactly `press_trigger` down after a hole before
//! its last, a new press starts on the next hole and runs to the same end.
//! Each match spawns at most one press; presses can spawn presses.

use crate::domain::{
    ActiveMode, AuxState, GameSetup, MatchFormat, ModeConfig, ModeTag, Money, PlayerId,
    PressMatch, ScoreMatrix, BACK_NINE, FRONT_NINE, FULL_ROUND,
};
use crate::engine::modes::valid_teams;
use crate::engine::{Contest, RoundView};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::slice;
use tracing::debug;

/// What a mode presses: its segments and how its matches are formed.
struct PressPlan {
    mode: ModeTag,
    trigger: i64,
    use_handicap: bool,
    segments: Vec<(RangeInclusive<usize>, Money)>,
}

fn plan_for(config: &ModeConfig) -> Option<PressPlan> {
    match config {
        ModeConfig::Nassau(c) if c.auto_press && c.format == MatchFormat::Match => Some(PressPlan {
            mode: ModeTag::Nassau,
            trigger: i64::from(c.press_trigger),
            use_handicap: c.use_handicap,
            segments: vec![(FRONT_NINE, c.front), (BACK_NINE, c.back)],
        }),
        ModeConfig::HeadToHead(c) if c.auto_press && c.format == MatchFormat::Match => {
            Some(PressPlan {
                mode: ModeTag::HeadToHead,
                trigger: i64::from(c.press_trigger),
                use_handicap: c.use_handicap,
                segments: vec![(FULL_ROUND, c.bet)],
            })
        }
        ModeConfig::BestBall(c) if c.auto_press && c.format == MatchFormat::Match => {
            Some(PressPlan {
                mode: ModeTag::BestBall,
                trigger: i64::from(c.press_trigger),
                use_handicap: c.use_handicap,
                segments: vec![(FULL_ROUND, c.bet)],
            })
        }
        _ => None,
    }
}

/// The chain of presses one segment of one contest spawns.
fn press_chain(
    contest: &Contest<'_>,
    view: &RoundView<'_>,
    trigger: i64,
    segment: RangeInclusive<usize>,
    bet: Money,
    pair: Option<[PlayerId; 2]>,
) -> Vec<PressMatch> {
    let end = *segment.end();
    let mut spawned = Vec::new();
    let mut origin = segment;
    loop {
        let start = contest
            .lead_path(view, origin.clone())
            .into_iter()
            .find(|&(h, lead)| lead.abs() == trigger && h < end)
            .map(|(h, _)| h + 1);
        let Some(start) = start else { break };
        spawned.push(PressMatch {
            start_hole: start,
            end_hole: end,
            mode: contest.mode,
            bet,
            pair: pair.clone(),
        });
        origin = start..=end;
    }
    spawned
}

/// Every press the current scores call for under `mode`.
fn presses_for_mode(mode: &ActiveMode, participants: &[PlayerId], view: &RoundView<'_>) -> Vec<PressMatch> {
    let Some(plan) = plan_for(&mode.config) else {
        return Vec::new();
    };
    if plan.trigger < 1 {
        return Vec::new();
    }

    let mut spawned = Vec::new();
    match &mode.config {
        ModeConfig::BestBall(c) => {
            if valid_teams(&c.team_a, &c.team_b, participants) {
                let contest = Contest {
                    mode: plan.mode,
                    side_a: &c.team_a,
                    side_b: &c.team_b,
                    format: MatchFormat::Match,
                    use_handicap: plan.use_handicap,
                };
                run_segments(&plan, &contest, view, None, &mut spawned);
            }
        }
        _ => {
            for (i, a) in participants.iter().enumerate() {
                for b in &participants[i + 1..] {
                    let contest = Contest {
                        mode: plan.mode,
                        side_a: slice::from_ref(a),
                        side_b: slice::from_ref(b),
                        format: MatchFormat::Match,
                        use_handicap: plan.use_handicap,
                    };
                    let pair = Some([a.clone(), b.clone()]);
                    run_segments(&plan, &contest, view, pair, &mut spawned);
                }
            }
        }
    }
    spawned
}

fn run_segments(
    plan: &PressPlan,
    contest: &Contest<'_>,
    view: &RoundView<'_>,
    pair: Option<[PlayerId; 2]>,
    out: &mut Vec<PressMatch>,
) {
    for (segment, bet) in &plan.segments {
        out.extend(press_chain(
            contest,
            view,
            plan.trigger,
            segment.clone(),
            *bet,
            pair.clone(),
        ));
    }
}

/// Presses the current scores call for that `aux` does not already hold.
pub fn spawn_auto_presses(setup: &GameSetup, scores: &ScoreMatrix, aux: &AuxState) -> Vec<PressMatch> {
    let view = RoundView::new(&setup.players, scores, aux);
    let existing: BTreeSet<&PressMatch> = aux.presses.iter().collect();
    let mut seen = BTreeSet::new();
    let mut fresh = Vec::new();

    for mode in &setup.modes {
        let participants = setup.participants(mode);
        for press in presses_for_mode(mode, &participants, &view) {
            if existing.contains(&press) || !seen.insert(press.clone()) {
                continue;
            }
            debug!(
                mode = %press.mode,
                start_hole = press.start_hole,
                end_hole = press.end_hole,
                bet = %press.bet,
                "Press spawned"
            );
            fresh.push(press);
        }
    }
    fresh
}

/// `aux` with every missing auto press appended.
pub fn with_auto_presses(setup: &GameSetup, scores: &ScoreMatrix, aux: &AuxState) -> AuxState {
    let mut next = aux.clone();
    next.presses
        .extend(spawn_auto_presses(setup, scores, aux));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BestBallConfig, HeadToHeadConfig, NassauConfig, Player};

    fn m(v: i64) -> Money {
        Money::from_int(v)
    }

    fn nassau(auto_press: bool) -> ActiveMode {
        ActiveMode::new(ModeConfig::Nassau(NassauConfig {
            front: m(5),
            back: m(5),
            overall: m(10),
            format: MatchFormat::Match,
            use_handicap: false,
            auto_press,
            press_trigger: 2,
        }))
    }

    fn two_players() -> (GameSetup, PlayerId, PlayerId) {
        let setup = GameSetup::new(vec![Player::new("a", "A", 0), Player::new("b", "B", 0)]);
        (setup, PlayerId::new("a"), PlayerId::new("b"))
    }

    #[test]
    fn test_two_down_spawns_chained_presses() {
        let (setup, a, b) = two_players();
        let setup = setup.with_mode(nassau(true));
        let scores = ScoreMatrix::default()
            .with_row(&a, &[4, 4, 4, 3])
            .with_row(&b, &[5, 5, 5, 4]);

        let presses = spawn_auto_presses(&setup, &scores, &AuxState::default());
        let ranges: Vec<(usize, usize)> = presses.iter().map(|p| (p.start_hole, p.end_hole)).collect();
        assert_eq!(ranges, vec![(2, 8), (4, 8)]);
        assert!(presses.iter().all(|p| p.pair == Some([a.clone(), b.clone()])));
        assert!(presses.iter().all(|p| p.bet == m(5)));
    }

    #[test]
    fn test_spawning_is_idempotent() {
        let (setup, a, b) = two_players();
        let setup = setup.with_mode(nassau(true));
        let scores = ScoreMatrix::default()
            .with_row(&a, &[4, 4, 4, 3])
            .with_row(&b, &[5, 5, 5, 4]);

        let once = with_auto_presses(&setup, &scores, &AuxState::default());
        let twice = with_auto_presses(&setup, &scores, &once);
        assert_eq!(once, twice);
        assert!(spawn_auto_presses(&setup, &scores, &once).is_empty());
    }

    #[test]
    fn test_no_press_without_auto_press() {
        let (setup, a, b) = two_players();
        let setup = setup.with_mode(nassau(false));
        let scores = ScoreMatrix::default()
            .with_row(&a, &[4, 4, 4, 3])
            .with_row(&b, &[5, 5, 5, 4]);
        assert!(spawn_auto_presses(&setup, &scores, &AuxState::default()).is_empty());
    }

    #[test]
    fn test_no_press_on_last_hole() {
        let (setup, a, b) = two_players();
        let setup = setup.with_mode(ActiveMode::new(ModeConfig::HeadToHead(HeadToHeadConfig {
            bet: m(10),
            format: MatchFormat::Match,
            use_handicap: false,
            auto_press: true,
            press_trigger: 1,
        })));
        let mut a_row = [4_u8; 18];
        a_row[17] = 5;
        let scores = ScoreMatrix::default()
            .with_row(&a, &a_row)
            .with_row(&b, &[4; 18]);
        assert!(spawn_auto_presses(&setup, &scores, &AuxState::default()).is_empty());
    }

    #[test]
    fn test_best_ball_press_has_no_pair() {
        let setup = GameSetup::new(
            ["a", "b", "c", "d"]
                .iter()
                .map(|id| Player::new(*id, *id, 0))
                .collect(),
        );
        let ids: Vec<PlayerId> = setup.players.iter().map(|p| p.id.clone()).collect();
        let setup = setup.with_mode(ActiveMode::new(ModeConfig::BestBall(BestBallConfig {
            team_a: ids[..2].to_vec(),
            team_b: ids[2..].to_vec(),
            bet: m(2),
            format: MatchFormat::Match,
            use_handicap: false,
            auto_press: true,
            press_trigger: 2,
        })));
        let scores = ids
            .iter()
            .zip([3_u8, 5, 4, 5])
            .fold(ScoreMatrix::default(), |acc, (p, s)| acc.with_row(p, &[s, s]));

        let presses = spawn_auto_presses(&setup, &scores, &AuxState::default());
        assert_eq!(presses.len(), 1);
        assert_eq!((presses[0].start_hole, presses[0].end_hole), (2, 17));
        assert_eq!(presses[0].pair, None);
    }
}
