//! Serializable tournament snapshot: the contract with the storage collaborator.

use crate::models::player::PlayerId;
use crate::models::registry::PlayerRegistry;
use crate::models::round::Round;
use crate::models::tournament::{Tournament, TournamentError, TournamentId, TournamentStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything storage needs to persist a tournament. Players appear by id
/// only; rounds are carried in full (matches, scores, timestamps) so that
/// points can be replayed on restore instead of trusting a stored total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    pub id: TournamentId,
    pub name: String,
    pub place: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub total_rounds: usize,
    pub status: TournamentStatus,
    pub current_round_index: usize,
    pub players: Vec<PlayerId>,
    pub rounds: Vec<Round>,
    pub history: Vec<(PlayerId, PlayerId)>,
}

impl TournamentSnapshot {
    /// Capture the tournament's full state for persistence.
    pub fn capture(tournament: &Tournament) -> Self {
        Self {
            id: tournament.id,
            name: tournament.name.clone(),
            place: tournament.place.clone(),
            start_date: tournament.start_date,
            end_date: tournament.end_date,
            description: tournament.description.clone(),
            total_rounds: tournament.total_rounds,
            status: tournament.status,
            current_round_index: tournament.current_round_index,
            players: tournament
                .players
                .iter()
                .map(|p| p.national_id.clone())
                .collect(),
            rounds: tournament.rounds.clone(),
            history: tournament.history.sorted_pairs(),
        }
    }

    /// Rebuild a tournament from this snapshot, resolving player ids through
    /// the registry. Points are recomputed by replaying every recorded match
    /// score, so a stale or hand-edited total can never leak back in.
    pub fn restore(self, registry: &PlayerRegistry) -> Result<Tournament, TournamentError> {
        let mut players = registry.collect_players(&self.players)?;
        for p in &mut players {
            p.points = 0.0;
        }

        let mut tournament = Tournament {
            id: self.id,
            name: self.name,
            place: self.place,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            total_rounds: self.total_rounds,
            status: self.status,
            current_round_index: self.current_round_index,
            players,
            rounds: self.rounds,
            history: self.history.into_iter().collect(),
        };
        replay_points(&mut tournament);
        Ok(tournament)
    }
}

/// Walk every round's matches and re-accumulate points from the stored scores.
fn replay_points(tournament: &mut Tournament) {
    let scores: Vec<(PlayerId, f64)> = tournament
        .rounds
        .iter()
        .flat_map(|round| round.matches.iter())
        .flat_map(|m| {
            [
                (m.player1.clone(), m.score1),
                (m.player2.clone(), m.score2),
            ]
        })
        .collect();
    for (id, score) in scores {
        if let Some(p) = tournament.player_mut(&id) {
            p.add_points(score);
        }
    }
}

impl Tournament {
    /// Convenience wrapper for [`TournamentSnapshot::capture`].
    pub fn snapshot(&self) -> TournamentSnapshot {
        TournamentSnapshot::capture(self)
    }
}
