//! Who is the wolf on a given hole.
//!
//! Holes 1-16 follow the tee rotation. On the last two holes the player in
//! last place in wolf money through the previous hole takes the role, ties
//! broken by the configured rule.

use crate::domain::{
    last_place, AuxState, GameSetup, ModeConfig, PlayerId, ScoreMatrix, StandingKey, WolfConfig,
    HOLES,
};
use crate::engine::modes::wolf;
use crate::engine::RoundView;

/// First hole (0-based) decided by standings instead of rotation.
pub const STANDINGS_FROM_HOLE: usize = 16;

/// Tee rotation for `config`: the configured order restricted to
/// participants, or participant order when none is configured.
pub fn rotation(config: &WolfConfig, participants: &[PlayerId]) -> Vec<PlayerId> {
    let configured: Vec<PlayerId> = config
        .rotation
        .iter()
        .filter(|p| participants.contains(p))
        .cloned()
        .collect();
    if configured.is_empty() {
        participants.to_vec()
    } else {
        configured
    }
}

/// The wolf on `hole`, or `None` when the hole or field is out of range.
pub fn assign_wolf(
    config: &WolfConfig,
    participants: &[PlayerId],
    view: &RoundView<'_>,
    hole: usize,
) -> Option<PlayerId> {
    let order = rotation(config, participants);
    if order.is_empty() || hole >= HOLES {
        return None;
    }
    if hole < STANDINGS_FROM_HOLE {
        return order.get(hole % order.len()).cloned();
    }

    let standings = wolf::evaluate_through(config, participants, view, hole);
    let keys: Vec<StandingKey> = order
        .iter()
        .enumerate()
        .map(|(pos, p)| {
            StandingKey::new(
                p.clone(),
                standings.amount(p),
                pos,
                view.handicap(p),
                config.last_place_tiebreak,
            )
        })
        .collect();
    last_place(&keys).cloned()
}

/// The wolf on `hole` for the first Wolf mode in `setup`.
pub fn wolf_assignment(
    setup: &GameSetup,
    scores: &ScoreMatrix,
    aux: &AuxState,
    hole: usize,
) -> Option<PlayerId> {
    let (mode, config) = setup.modes.iter().find_map(|m| match &m.config {
        ModeConfig::Wolf(c) => Some((m, c)),
        _ => None,
    })?;
    let participants = setup.participants(mode);
    let view = RoundView::new(&setup.players, scores, aux);
    assign_wolf(config, &participants, &view, hole)
}
