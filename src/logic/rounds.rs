//! Round lifecycle: opening the next round of an in-progress tournament.

use crate::logic::pairing::pair_players;
use crate::models::{Round, Tournament, TournamentError, TournamentStatus};

/// Start the next round of an in-progress tournament.
///
/// Fails without touching state when the tournament is not in progress, the
/// current round is still open, or all planned rounds have been played.
pub fn start_next_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState { status: tournament.status });
    }
    if tournament.has_open_round() {
        return Err(TournamentError::RoundStillOpen);
    }
    if tournament.current_round_index >= tournament.total_rounds {
        return Err(TournamentError::RoundsExhausted {
            total_rounds: tournament.total_rounds,
        });
    }
    open_next_round(tournament)
}

/// Pair the field and append the new round. Guards are the caller's job.
pub(crate) fn open_next_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let matches = pair_players(tournament)?;
    let name = format!("Round {}", tournament.current_round_index + 1);
    log::info!(
        "tournament '{}': {} opened with {} matches",
        tournament.name,
        name,
        matches.len()
    );
    tournament.rounds.push(Round::new(name, matches));
    tournament.current_round_index += 1;
    Ok(())
}
