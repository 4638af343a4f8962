//! Club-wide player registry, owned by the caller and passed in where needed.

use crate::models::player::{Player, PlayerId};
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};

/// All players known to the club, keyed by national id. Tournaments copy
/// players out of here at registration time and reference them by id in
/// snapshots; removing a registry entry never touches past tournaments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a registry from an existing collection (e.g. loaded storage).
    /// Later duplicates of a national id are dropped.
    pub fn from_players(players: Vec<Player>) -> Self {
        let mut registry = Self::new();
        for p in players {
            let _ = registry.register(p);
        }
        registry
    }

    /// Add a player. National ids must be unique.
    pub fn register(&mut self, player: Player) -> Result<(), TournamentError> {
        if self.get(&player.national_id).is_some() {
            return Err(TournamentError::DuplicatePlayer(player.national_id));
        }
        self.players.push(player);
        Ok(())
    }

    /// Remove and return a player by national id.
    pub fn remove(&mut self, id: &str) -> Result<Player, TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.national_id == id)
            .ok_or_else(|| TournamentError::PlayerNotFound(id.to_owned()))?;
        Ok(self.players.remove(idx))
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.national_id == id)
    }

    /// Update a player's identity fields in place (id stays fixed).
    pub fn update(&mut self, player: Player) -> Result<(), TournamentError> {
        let existing = self
            .players
            .iter_mut()
            .find(|p| p.national_id == player.national_id)
            .ok_or_else(|| TournamentError::PlayerNotFound(player.national_id.clone()))?;
        *existing = player;
        Ok(())
    }

    /// All players, in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// All players sorted by (last name, first name), for listings.
    pub fn sorted_by_name(&self) -> Vec<&Player> {
        let mut sorted: Vec<&Player> = self.players.iter().collect();
        sorted.sort_by(|a, b| {
            (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name))
        });
        sorted
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Clones of the players with the given ids, in the given order.
    pub fn collect_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>, TournamentError> {
        ids.iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| TournamentError::PlayerNotFound(id.clone()))
            })
            .collect()
    }
}
