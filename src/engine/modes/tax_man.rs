//! Tax Man: players over their tax line pay those under it.

use crate::domain::{ModeTag, PlayerId, TaxManConfig, HOLES};
use std::collections::BTreeMap;

use crate::engine::{Ledger, ModeResult, RoundView};

/// Strokes relative to each player's tax line over the holes every
/// participant has finished. Negative beats the tax.
pub fn relative_to_line(
    config: &TaxManConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
) -> BTreeMap<PlayerId, i64> {
    let settled: Vec<usize> = (0..HOLES)
        .filter(|&h| view.complete(participants, h))
        .collect();

    participants
        .iter()
        .map(|p| {
            let over_par: i64 = settled
                .iter()
                .filter_map(|&h| view.gross(p, h).map(|g| i64::from(g - view.par(h))))
                .sum();
            let line = match config.tax_lines.get(p) {
                Some(&line) => i64::from(line),
                None => settled
                    .iter()
                    .map(|&h| {
                        i64::from(view.scores.course.strokes_received(view.handicap(p), h))
                    })
                    .sum(),
            };
            (p.clone(), over_par - line)
        })
        .collect()
}

pub fn evaluate(config: &TaxManConfig, participants: &[PlayerId], view: &RoundView<'_>) -> ModeResult {
    let mut ledger = Ledger::new(ModeTag::TaxMan, participants);
    let rel = relative_to_line(config, participants, view);

    for (payer, &owed) in rel.iter().filter(|&(_, &r)| r > 0) {
        for (beater, &under) in rel.iter().filter(|&(_, &r)| r < 0) {
            ledger.transfer(payer, beater, config.bet.times(owed - under));
        }
    }
    ledger.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuxState, Player, ScoreMatrix};
    use crate::engine::modes::testing::{ids, m};

    #[test]
    fn test_payers_pay_beaters_by_difference() {
        let players = vec![
            Player::new("a", "a", 0),
            Player::new("b", "b", 2),
            Player::new("c", "c", 1),
        ];
        let ps = ids(&["a", "b", "c"]);
        // Holes 0-1 are par 4. a is 1 under, b 2 over (line 2),
        // c 3 over (line 1) for +2.
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[3, 4])
            .with_row(&ps[1], &[5, 5])
            .with_row(&ps[2], &[6, 5]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);
        let config = TaxManConfig {
            bet: m(1),
            tax_lines: BTreeMap::new(),
        };

        let rel = relative_to_line(&config, &ps, &view);
        assert_eq!(rel[&ps[0]], -1);
        assert_eq!(rel[&ps[1]], 0);
        assert_eq!(rel[&ps[2]], 2);

        let r = evaluate(&config, &ps, &view);
        assert_eq!(r.amount(&ps[0]), m(3));
        assert_eq!(r.amount(&ps[1]), m(0));
        assert_eq!(r.amount(&ps[2]), m(-3));
    }

    #[test]
    fn test_explicit_line_overrides_handicap() {
        let players = vec![Player::new("a", "a", 0), Player::new("b", "b", 0)];
        let ps = ids(&["a", "b"]);
        let scores = ScoreMatrix::default()
            .with_row(&ps[0], &[4])
            .with_row(&ps[1], &[6]);
        let aux = AuxState::default();
        let view = RoundView::new(&players, &scores, &aux);
        let mut tax_lines = BTreeMap::new();
        tax_lines.insert(ps[1].clone(), 3);
        let config = TaxManConfig { bet: m(1), tax_lines };

        // b is 2 over with a line of 3: beats the tax; a sits on the line.
        let r = evaluate(&config, &ps, &view);
        assert!(r.net.values().all(|v| v.is_zero()));
        assert_eq!(relative_to_line(&config, &ps, &view)[&ps[1]], -1);
    }
}
