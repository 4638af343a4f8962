//! Player data structure and identifier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a player: the federation id printed on the club card
/// (e.g. "AB12345"). Assigned externally, never generated here.
pub type PlayerId = String;

/// A club player. Identity lives in `national_id`; `points` accumulate over
/// one tournament and are recomputed from match history when reloading.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub national_id: PlayerId,
    pub last_name: String,
    pub first_name: String,
    pub birth_date: NaiveDate,
    pub points: f64,
}

impl Player {
    /// Create a new player with zero points.
    pub fn new(
        national_id: impl Into<PlayerId>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            national_id: national_id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            birth_date,
            points: 0.0,
        }
    }

    /// Add to this player's running score (win = 1.0, draw = 0.5, loss = 0.0).
    pub fn add_points(&mut self, points: f64) {
        self.points += points;
    }
}

/// Players are equal when their national ids match.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.national_id == other.national_id
    }
}

impl Eq for Player {}
