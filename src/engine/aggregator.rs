//! Runs every active mode over one snapshot and folds the results.

use crate::domain::{ActiveMode, AuxState, GameSetup, Money, Player, PlayerId, ScoreMatrix};
use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::{modes, CombinedResult, RoundView};

/// Evaluate `modes` against the snapshot and sum per player.
///
/// Every player gets a `net` entry, zero when they are in no mode. Repeated
/// mode tags are summed under one `by_mode` key.
pub fn combine(
    players: &[Player],
    active: &[ActiveMode],
    scores: &ScoreMatrix,
    aux: &AuxState,
) -> CombinedResult {
    let view = RoundView::new(players, scores, aux);
    let mut combined = CombinedResult {
        net: players
            .iter()
            .map(|p| (p.id.clone(), Money::zero()))
            .collect(),
        by_mode: BTreeMap::new(),
    };

    for mode in active {
        let participants: Vec<PlayerId> = mode.participants_in(players);
        let result = modes::evaluate(&mode.config, &participants, &view);
        trace!(
            mode = %result.mode,
            participants = participants.len(),
            total = %result.total(),
            "Mode evaluated"
        );

        let per_mode = combined.by_mode.entry(result.mode).or_default();
        for (player, amount) in result.net {
            *per_mode.entry(player.clone()).or_default() += amount;
            *combined.net.entry(player).or_default() += amount;
        }
    }

    debug!(
        players = players.len(),
        modes = active.len(),
        holes_scored = scores.holes_scored(players.iter().map(|p| &p.id)),
        "Combined round settlement"
    );
    combined
}

/// `combine` for a whole setup.
pub fn settle(setup: &GameSetup, scores: &ScoreMatrix, aux: &AuxState) -> CombinedResult {
    combine(&setup.players, &setup.modes, scores, aux)
}
