//! Result recording, round closing and standings.

use crate::models::{Player, Tournament, TournamentError, TournamentStatus};

/// One recorded result: which match it belongs to and both scores.
/// Valid score pairs are 1-0, 0-1 and 0.5-0.5; the caller validates input,
/// the engine validates the indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    pub round_index: usize,
    pub match_index: usize,
    pub score1: f64,
    pub score2: f64,
}

impl MatchResult {
    pub fn new(round_index: usize, match_index: usize, score1: f64, score2: f64) -> Self {
        Self {
            round_index,
            match_index,
            score1,
            score2,
        }
    }
}

/// Record the results of the current round, add the points to both players of
/// each match, and close the round. Closing the last planned round finishes
/// the tournament.
///
/// Every entry is checked before anything is written: a bad round or match
/// index, or an unknown player id, rejects the whole batch with the
/// tournament unchanged.
pub fn record_results(
    tournament: &mut Tournament,
    results: &[MatchResult],
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState { status: tournament.status });
    }
    // InProgress implies at least one round exists.
    let current = tournament
        .current_round_index
        .checked_sub(1)
        .ok_or(TournamentError::InvalidState { status: tournament.status })?;
    if !tournament.rounds[current].is_open() {
        return Err(TournamentError::RoundAlreadyClosed);
    }

    // Validation pass: no mutation until every entry resolves.
    for r in results {
        let round = tournament
            .rounds
            .get(r.round_index)
            .ok_or(TournamentError::NoSuchRound { index: r.round_index })?;
        let m = round
            .matches
            .get(r.match_index)
            .ok_or(TournamentError::NoSuchMatch {
                round_index: r.round_index,
                match_index: r.match_index,
            })?;
        for id in [&m.player1, &m.player2] {
            if tournament.player(id).is_none() {
                return Err(TournamentError::PlayerNotFound(id.clone()));
            }
        }
    }

    for r in results {
        let m = &mut tournament.rounds[r.round_index].matches[r.match_index];
        m.set_scores(r.score1, r.score2);
        let (p1, p2) = (m.player1.clone(), m.player2.clone());
        if let Some(p) = tournament.player_mut(&p1) {
            p.add_points(r.score1);
        }
        if let Some(p) = tournament.player_mut(&p2) {
            p.add_points(r.score2);
        }
    }

    tournament.rounds[current].close();
    log::info!(
        "tournament '{}': round {} closed ({} results)",
        tournament.name,
        current + 1,
        results.len()
    );

    if tournament.current_round_index >= tournament.total_rounds {
        tournament.status = TournamentStatus::Finished;
        log::info!("tournament '{}' finished", tournament.name);
    }
    Ok(())
}

/// Current leaderboard: players with their points, best first. Players on
/// equal points stay in roster registration order. Read-only.
pub fn standings(tournament: &Tournament) -> Vec<(&Player, f64)> {
    let mut rows: Vec<&Player> = tournament.players.iter().collect();
    rows.sort_by(|a, b| b.points.total_cmp(&a.points));
    rows.into_iter().map(|p| (p, p.points)).collect()
}
