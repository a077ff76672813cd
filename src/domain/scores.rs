//! Course layout and the shared score matrix every evaluator reads.

use crate::domain::{PlayerId, HOLES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Par and stroke index per hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub pars: [u8; HOLES],
    /// Handicap allocation order, 1 = hardest hole. Hole order when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_index: Option<[u8; HOLES]>,
}

impl Course {
    pub fn new(pars: [u8; HOLES]) -> Self {
        Course {
            pars,
            stroke_index: None,
        }
    }

    pub fn with_stroke_index(mut self, stroke_index: [u8; HOLES]) -> Self {
        self.stroke_index = Some(stroke_index);
        self
    }

    pub fn par(&self, hole: usize) -> i32 {
        self.pars.get(hole).copied().map(i32::from).unwrap_or(4)
    }

    pub fn stroke_index(&self, hole: usize) -> i32 {
        match &self.stroke_index {
            Some(si) => si.get(hole).copied().map(i32::from).unwrap_or(HOLES as i32),
            None => hole as i32 + 1,
        }
    }

    /// Handicap strokes a player receives on `hole`.
    ///
    /// Plus handicaps give strokes back on the easiest holes.
    pub fn strokes_received(&self, handicap: i32, hole: usize) -> i32 {
        let si = self.stroke_index(hole);
        let holes = HOLES as i32;
        if handicap >= 0 {
            handicap / holes + i32::from(si <= handicap % holes)
        } else {
            let plus = -handicap;
            -(plus / holes + i32::from(si > holes - plus % holes))
        }
    }

    pub fn total_par(&self) -> i32 {
        self.pars.iter().map(|&p| i32::from(p)).sum()
    }
}

impl Default for Course {
    fn default() -> Self {
        Course::new([4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5])
    }
}

/// Per-player, per-hole gross strokes. `None` means not yet played.
///
/// Rows may be shorter than 18; missing trailing holes are unplayed. A
/// recorded value of zero is treated as unplayed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMatrix {
    #[serde(default)]
    pub course: Course,
    #[serde(default)]
    pub strokes: BTreeMap<PlayerId, Vec<Option<u8>>>,
}

impl ScoreMatrix {
    pub fn new(course: Course) -> Self {
        ScoreMatrix {
            course,
            strokes: BTreeMap::new(),
        }
    }

    /// Record (or overwrite) a score.
    pub fn set(&mut self, player: &PlayerId, hole: usize, strokes: u8) {
        if hole >= HOLES {
            return;
        }
        let row = self.strokes.entry(player.clone()).or_default();
        if row.len() <= hole {
            row.resize(hole + 1, None);
        }
        row[hole] = Some(strokes);
    }

    /// Record a run of scores starting at hole 0.
    pub fn with_row(mut self, player: &PlayerId, scores: &[u8]) -> Self {
        for (hole, &s) in scores.iter().enumerate() {
            self.set(player, hole, s);
        }
        self
    }

    pub fn strokes(&self, player: &PlayerId, hole: usize) -> Option<i32> {
        self.strokes
            .get(player)
            .and_then(|row| row.get(hole))
            .copied()
            .flatten()
            .filter(|&s| s > 0)
            .map(i32::from)
    }

    pub fn par(&self, hole: usize) -> i32 {
        self.course.par(hole)
    }

    pub fn holes_played(&self, player: &PlayerId) -> usize {
        (0..HOLES)
            .filter(|&h| self.strokes(player, h).is_some())
            .count()
    }

    /// Holes every listed player has a score on.
    pub fn holes_scored<'a, I>(&self, players: I) -> usize
    where
        I: IntoIterator<Item = &'a PlayerId> + Clone,
    {
        (0..HOLES)
            .filter(|&h| self.hole_complete(players.clone(), h))
            .count()
    }

    /// True when every listed player has a score on `hole`.
    pub fn hole_complete<'a, I>(&self, players: I, hole: usize) -> bool
    where
        I: IntoIterator<Item = &'a PlayerId>,
    {
        players
            .into_iter()
            .all(|p| self.strokes(p, hole).is_some())
    }
}
