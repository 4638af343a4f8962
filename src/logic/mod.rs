//! Tournament engine logic: setup, pairing, rounds, scoring, winner.

mod pairing;
mod rounds;
mod scoring;
mod setup;
mod winner;

pub use rounds::start_next_round;
pub use scoring::{record_results, standings, MatchResult};
pub use setup::start_tournament;
pub use winner::determine_winner;
