//! Round: an ordered set of matches with open/close timestamps.

use crate::models::game::Match;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One complete cycle of matches. Created open (`end_time` = None) by the
/// pairing step; closed once, when all its results are recorded. A closed
/// round is never touched again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    pub matches: Vec<Match>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Round {
    /// Create an open round, stamped with the current time.
    pub fn new(name: impl Into<String>, matches: Vec<Match>) -> Self {
        Self {
            name: name.into(),
            matches,
            start_time: Utc::now(),
            end_time: None,
        }
    }

    /// Stamp the end time, closing the round.
    pub fn close(&mut self) {
        self.end_time = Some(Utc::now());
    }

    /// A round without an end time is still being played.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}
