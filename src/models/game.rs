//! Match: a single board between two players in one round.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One pairing for one round. Player order only matters for display. Scores
/// stay at 0-0 until the round's results are recorded; whether a 0-0 means
/// "unplayed" or "not yet recorded" is tracked by the owning round's
/// `end_time`, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub score1: f64,
    pub score2: f64,
}

impl Match {
    /// Create an unplayed match between two players.
    pub fn new(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            player1,
            player2,
            score1: 0.0,
            score2: 0.0,
        }
    }

    /// Store the result. Expected pairs are 1-0, 0-1 or 0.5-0.5.
    pub fn set_scores(&mut self, score1: f64, score2: f64) {
        self.score1 = score1;
        self.score2 = score2;
    }

    /// True when the recorded scores are a win for one side (not a draw).
    pub fn is_decisive(&self) -> bool {
        self.score1 != self.score2
    }
}
