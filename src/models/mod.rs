//! Data structures for chess-club tournaments: players, matches, rounds, state.

mod game;
mod player;
mod registry;
mod round;
mod snapshot;
mod tournament;

pub use game::Match;
pub use player::{Player, PlayerId};
pub use registry::PlayerRegistry;
pub use round::Round;
pub use snapshot::TournamentSnapshot;
pub use tournament::{
    PairingHistory, Tournament, TournamentError, TournamentId, TournamentStatus,
    DEFAULT_TOTAL_ROUNDS,
};
