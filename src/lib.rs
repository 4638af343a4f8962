//! Chess club tournament engine: roster, Swiss pairing, rounds and standings.

pub mod logic;
pub mod models;

pub use logic::{
    determine_winner, record_results, standings, start_next_round, start_tournament, MatchResult,
};
pub use models::{
    Match, PairingHistory, Player, PlayerId, PlayerRegistry, Round, Tournament, TournamentError,
    TournamentId, TournamentSnapshot, TournamentStatus, DEFAULT_TOTAL_ROUNDS,
};
