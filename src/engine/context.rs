//! Read-only view of one round snapshot, shared by every evaluator.

use crate::domain::{AuxState, ModeTag, Player, PlayerId, ScoreMatrix};

#[derive(Clone, Copy)]
pub struct RoundView<'a> {
    pub players: &'a [Player],
    pub scores: &'a ScoreMatrix,
    pub aux: &'a AuxState,
}

impl<'a> RoundView<'a> {
    pub fn new(players: &'a [Player], scores: &'a ScoreMatrix, aux: &'a AuxState) -> Self {
        Self {
            players,
            scores,
            aux,
        }
    }

    pub fn handicap(&self, player: &PlayerId) -> i32 {
        self.players
            .iter()
            .find(|p| &p.id == player)
            .map(|p| p.handicap)
            .unwrap_or(0)
    }

    pub fn par(&self, hole: usize) -> i32 {
        self.scores.par(hole)
    }

    pub fn gross(&self, player: &PlayerId, hole: usize) -> Option<i32> {
        self.scores.strokes(player, hole)
    }

    pub fn net(&self, player: &PlayerId, hole: usize) -> Option<i32> {
        let received = self
            .scores
            .course
            .strokes_received(self.handicap(player), hole);
        self.gross(player, hole).map(|g| g - received)
    }

    /// Net when `use_handicap`, gross otherwise.
    pub fn score(&self, player: &PlayerId, hole: usize, use_handicap: bool) -> Option<i32> {
        if use_handicap {
            self.net(player, hole)
        } else {
            self.gross(player, hole)
        }
    }

    pub fn complete(&self, players: &[PlayerId], hole: usize) -> bool {
        self.scores.hole_complete(players, hole)
    }

    /// Lowest score among `team`, only when every member has one.
    pub fn best_ball(&self, team: &[PlayerId], hole: usize, use_handicap: bool) -> Option<i32> {
        if team.is_empty() {
            return None;
        }
        let mut best: Option<i32> = None;
        for member in team {
            let s = self.score(member, hole, use_handicap)?;
            best = Some(best.map_or(s, |b| b.min(s)));
        }
        best
    }

    pub fn hammer(&self, mode: ModeTag, hole: usize) -> i64 {
        self.aux.hammer_multiplier(mode, hole)
    }
}
