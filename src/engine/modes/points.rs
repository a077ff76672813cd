//! Points against par: Stableford per hole and Quota over the full round.

use crate::domain::{ModeTag, ParResult, PlayerId, QuotaConfig, StablefordConfig, HOLES};
use std::collections::BTreeMap;

use crate::engine::{Ledger, ModeResult, RoundView};

/// Full round quota before handicap.
const QUOTA_BASE: i64 = 36;

pub fn stableford_points(result: ParResult) -> i64 {
    match result {
        ParResult::AlbatrossOrBetter => 5,
        ParResult::Eagle => 4,
        ParResult::Birdie => 3,
        ParResult::Par => 2,
        ParResult::Bogey => 1,
        ParResult::DoubleBogeyOrWorse => 0,
    }
}

pub fn quota_points(result: ParResult) -> i64 {
    match result {
        ParResult::AlbatrossOrBetter => 16,
        ParResult::Eagle => 8,
        ParResult::Birdie => 4,
        ParResult::Par => 2,
        ParResult::Bogey => 1,
        ParResult::DoubleBogeyOrWorse => 0,
    }
}

pub fn evaluate_stableford(
    config: &StablefordConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Stableford, participants);
    let mut points: BTreeMap<PlayerId, i64> =
        participants.iter().map(|p| (p.clone(), 0)).collect();

    for hole in (0..HOLES).filter(|&h| view.complete(participants, h)) {
        for (player, total) in points.iter_mut() {
            if let Some(score) = view.score(player, hole, config.use_handicap) {
                *total += stableford_points(ParResult::from_diff(score - view.par(hole)));
            }
        }
    }

    ledger.settle_points(&points, config.bet_per_point);
    ledger.into_result()
}

/// Quota target: `36 − handicap` unless overridden.
pub fn quota_target(config: &QuotaConfig, view: &RoundView<'_>, player: &PlayerId) -> i64 {
    config
        .quota_overrides
        .get(player)
        .map(|&q| i64::from(q))
        .unwrap_or_else(|| QUOTA_BASE - i64::from(view.handicap(player)))
}

pub fn evaluate_quota(config: &QuotaConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::Quota, participants);
    if !(0..HOLES).all(|h| view.complete(participants, h)) {
        return ledger.into_result();
    }

    let rel: BTreeMap<PlayerId, i64> = participants
        .iter()
        .map(|p| {
            let earned: i64 = (0..HOLES)
                .filter_map(|h| view.gross(p, h).map(|g| quota_points(ParResult::from_diff(g - view.par(h)))))
                .sum();
            (p.clone(), earned - quota_target(config, view, p))
        })
        .collect();

    ledger.settle_points(&rel, config.bet_per_point);
    ledger.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuxState, Course, Player, ScoreMatrix};
    use crate::engine::modes::testing::{ids, m, scratch};

    #[test]
    fn test_stableford_complete_holes_only() {
        let players = scratch(&["a", "b"]);
        let ps = ids(&["a", "b"]);
        // Hole 0 par 4: a birdie 3, b bogey 1. Hole 1 only a scored.
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[3, 2])
            .with_row(&ps[1], &[5]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);
        let config = StablefordConfig {
            bet_per_point: m(1),
            use_handicap: false,
        };

        let r = evaluate_stableford(&config, &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(2));
        assert_eq!(r.amount(&ps[1]), m(-2));
    }

    #[test]
    fn test_quota_needs_full_round() {
        let players = vec![Player::new("a", "a", 0), Player::new("b", "b", 10)];
        let ps = ids(&["a", "b"]);
        let course = Course::new([4; 18]);
        let partial = ScoreMatrix::new(course.clone())
            .with_row(&ps[0], &[4; 17])
            .with_row(&ps[1], &[5; 18]);
        let aux = AuxState::default();
        let config = QuotaConfig {
            bet_per_point: m(1),
            quota_overrides: BTreeMap::new(),
        };

        let view = RoundView::new(&players, &partial, &aux);
        assert!(evaluate_quota(&config, &ps, &view).net.values().all(|v| v.is_zero()));

        // a: 18 pars = 36 points on a 36 quota; b: 18 bogeys = 18 on 26.
        let full = ScoreMatrix::new(course)
            .with_row(&ps[0], &[4; 18])
            .with_row(&ps[1], &[5; 18]);
        let view = RoundView::new(&players, &full, &aux);
        let r = evaluate_quota(&config, &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(8));
        assert_eq!(r.amount(&ps[1]), m(-8));
    }

    #[test]
    fn test_quota_override() {
        let players = scratch(&["a"]);
        let mut overrides = BTreeMap::new();
        overrides.insert(PlayerId::new("a"), 30);
        let config = QuotaConfig {
            bet_per_point: m(1),
            quota_overrides: overrides,
        };
        let scores = ScoreMatrix::default();
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);
        assert_eq!(quota_target(&config, &view, &PlayerId::new("a")), 30);
        assert_eq!(quota_target(&config, &view, &PlayerId::new("z")), 36);
    }
}
