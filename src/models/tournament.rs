//! Tournament, TournamentStatus and the errors shared by all operations.

use crate::models::player::{Player, PlayerId};
use crate::models::round::Round;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Errors that can occur during tournament operations. All are recoverable:
/// a failing operation leaves the tournament exactly as it found it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Roster is empty or has an odd number of players.
    InvalidRoster { count: usize },
    /// Operation not allowed while the tournament is in this status.
    InvalidState { status: TournamentStatus },
    /// The current round must be closed before starting the next one.
    RoundStillOpen,
    /// The current round is already closed; nothing left to record.
    RoundAlreadyClosed,
    /// All planned rounds have already been played.
    RoundsExhausted { total_rounds: usize },
    /// A result entry references a round that does not exist.
    NoSuchRound { index: usize },
    /// A result entry references a match that does not exist in its round.
    NoSuchMatch { round_index: usize, match_index: usize },
    /// A player with this national id is already on the roster or registry.
    DuplicatePlayer(PlayerId),
    /// Player not found on the roster or in the registry.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidRoster { count } => {
                write!(f, "Need an even number of players, at least 2 (have {})", count)
            }
            TournamentError::InvalidState { status } => {
                write!(f, "Action not allowed while the tournament is {}", status)
            }
            TournamentError::RoundStillOpen => {
                write!(f, "Close the current round before starting the next one")
            }
            TournamentError::RoundAlreadyClosed => {
                write!(f, "The current round is already closed")
            }
            TournamentError::RoundsExhausted { total_rounds } => {
                write!(f, "All {} rounds have already been played", total_rounds)
            }
            TournamentError::NoSuchRound { index } => write!(f, "No round at index {}", index),
            TournamentError::NoSuchMatch { round_index, match_index } => {
                write!(f, "No match {} in round {}", match_index, round_index)
            }
            TournamentError::DuplicatePlayer(id) => {
                write!(f, "A player with id {} is already registered", id)
            }
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle status. Stored explicitly and updated together with the rounds
/// it depends on, never recomputed from them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Roster can still change; no rounds exist yet.
    #[default]
    NotStarted,
    /// Rounds are being played; roster is frozen.
    InProgress,
    /// All rounds played and closed. Terminal.
    Finished,
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TournamentStatus::NotStarted => "not started",
            TournamentStatus::InProgress => "in progress",
            TournamentStatus::Finished => "finished",
        };
        write!(f, "{}", label)
    }
}

/// Set of unordered player pairs that have already faced each other.
/// Grow-only; this is the authoritative record the pairing pass consults
/// to avoid rematches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PairingHistory {
    pairs: HashSet<(PlayerId, PlayerId)>,
}

impl PairingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized key: the pair (a, b) and (b, a) are the same match-up.
    fn key(a: &str, b: &str) -> (PlayerId, PlayerId) {
        if a <= b {
            (a.to_owned(), b.to_owned())
        } else {
            (b.to_owned(), a.to_owned())
        }
    }

    /// Whether these two players have already played each other.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    /// Record that these two players have now been paired.
    pub fn record(&mut self, a: &str, b: &str) {
        self.pairs.insert(Self::key(a, b));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in a stable order (for snapshots).
    pub fn sorted_pairs(&self) -> Vec<(PlayerId, PlayerId)> {
        let mut pairs: Vec<_> = self.pairs.iter().cloned().collect();
        pairs.sort();
        pairs
    }
}

impl FromIterator<(PlayerId, PlayerId)> for PairingHistory {
    fn from_iter<I: IntoIterator<Item = (PlayerId, PlayerId)>>(iter: I) -> Self {
        let mut history = Self::new();
        for (a, b) in iter {
            history.record(&a, &b);
        }
        history
    }
}

/// Planned round count when the organizer does not pick one.
pub const DEFAULT_TOTAL_ROUNDS: usize = 4;

/// Full tournament state: basic info, roster, round history and pairing history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub place: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    /// Planned number of rounds.
    pub total_rounds: usize,
    pub status: TournamentStatus,
    /// Number of rounds created so far; always equals `rounds.len()`.
    pub current_round_index: usize,
    /// Roster, in registration order. Frozen once the tournament starts.
    pub players: Vec<Player>,
    /// Rounds played or in play, append-only.
    pub rounds: Vec<Round>,
    /// Match-ups already played, to avoid rematches.
    pub history: PairingHistory,
}

impl Tournament {
    /// Create a tournament with the default round count, NotStarted, empty roster.
    pub fn new(
        name: impl Into<String>,
        place: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self::with_total_rounds(name, place, start_date, end_date, description, DEFAULT_TOTAL_ROUNDS)
    }

    /// Create a tournament with a custom planned round count.
    pub fn with_total_rounds(
        name: impl Into<String>,
        place: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        description: impl Into<String>,
        total_rounds: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            place: place.into(),
            start_date,
            end_date,
            description: description.into(),
            total_rounds,
            status: TournamentStatus::NotStarted,
            current_round_index: 0,
            players: Vec::new(),
            rounds: Vec::new(),
            history: PairingHistory::new(),
        }
    }

    /// Reference to a roster player by national id.
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.national_id == id)
    }

    /// Mutable reference to a roster player by national id.
    pub(crate) fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.national_id == id)
    }

    /// The most recently created round, if any.
    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// True while the latest round has no end time yet.
    pub fn has_open_round(&self) -> bool {
        self.rounds.last().map_or(false, Round::is_open)
    }

    /// Register players on the roster (NotStarted only). Either every player
    /// is added or, on the first duplicate id, nothing is.
    pub fn add_players(&mut self, players: Vec<Player>) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::NotStarted {
            return Err(TournamentError::InvalidState { status: self.status });
        }
        let mut seen: HashSet<&str> =
            self.players.iter().map(|p| p.national_id.as_str()).collect();
        for p in &players {
            if !seen.insert(p.national_id.as_str()) {
                return Err(TournamentError::DuplicatePlayer(p.national_id.clone()));
            }
        }
        self.players.extend(players);
        Ok(())
    }

    /// Drop players from the roster (NotStarted only). The players themselves
    /// are not deleted, only their registration here. All-or-nothing: an
    /// unknown id rejects the whole call.
    pub fn remove_players(&mut self, ids: &[PlayerId]) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::NotStarted {
            return Err(TournamentError::InvalidState { status: self.status });
        }
        for id in ids {
            if self.player(id).is_none() {
                return Err(TournamentError::PlayerNotFound(id.clone()));
            }
        }
        self.players.retain(|p| !ids.contains(&p.national_id));
        Ok(())
    }

    /// Edit the basic info (name, place, dates, description). Allowed in any
    /// status; none of these fields drive the round engine.
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        place: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        description: impl Into<String>,
    ) {
        self.name = name.into();
        self.place = place.into();
        self.start_date = start_date;
        self.end_date = end_date;
        self.description = description.into();
    }

    /// Change the planned round count. Only before the first round exists;
    /// afterwards the count is part of the state machine.
    pub fn set_total_rounds(&mut self, total_rounds: usize) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::NotStarted {
            return Err(TournamentError::InvalidState { status: self.status });
        }
        self.total_rounds = total_rounds;
        Ok(())
    }
}
