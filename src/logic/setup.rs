//! Setup phase: start a tournament (transition from NotStarted to InProgress).

use crate::logic::rounds::open_next_round;
use crate::models::{Tournament, TournamentError, TournamentStatus};

/// Start the tournament: freeze the roster, switch to InProgress and open
/// round 1. Requires an even roster of at least 2 players.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::NotStarted {
        return Err(TournamentError::InvalidState { status: tournament.status });
    }
    let count = tournament.players.len();
    if count < 2 || count % 2 != 0 {
        return Err(TournamentError::InvalidRoster { count });
    }

    tournament.status = TournamentStatus::InProgress;
    if let Err(e) = open_next_round(tournament) {
        // A failed first round must not leave the tournament started.
        tournament.status = TournamentStatus::NotStarted;
        return Err(e);
    }
    log::info!(
        "tournament '{}' started: {} players, {} rounds planned",
        tournament.name,
        count,
        tournament.total_rounds
    );
    Ok(())
}
