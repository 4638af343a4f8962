//! Winner determination for a finished tournament.

use crate::models::{Player, Tournament, TournamentError, TournamentStatus};

/// Pick the winner of a finished tournament.
///
/// Three tiers, applied in order:
/// 1. Highest points, if a single player holds them.
/// 2. Among the tied leaders, the first decisive head-to-head match found
///    scanning rounds chronologically. Draws between leaders are skipped.
/// 3. Ascending alphabetical order on (last name, first name).
pub fn determine_winner(tournament: &Tournament) -> Result<&Player, TournamentError> {
    if tournament.status != TournamentStatus::Finished {
        return Err(TournamentError::InvalidState { status: tournament.status });
    }

    let top_score = tournament
        .players
        .iter()
        .map(|p| p.points)
        .fold(f64::NEG_INFINITY, f64::max);
    let leaders: Vec<&Player> = tournament
        .players
        .iter()
        .filter(|p| p.points == top_score)
        .collect();

    if let [winner] = leaders[..] {
        return Ok(winner);
    }

    // Tied leaders: a decisive match between two of them settles it.
    for round in &tournament.rounds {
        for m in &round.matches {
            let p1_leads = leaders.iter().any(|p| p.national_id == m.player1);
            let p2_leads = leaders.iter().any(|p| p.national_id == m.player2);
            if p1_leads && p2_leads && m.is_decisive() {
                let winner_id = if m.score1 > m.score2 { &m.player1 } else { &m.player2 };
                if let Some(winner) = leaders.iter().find(|p| &p.national_id == winner_id) {
                    return Ok(winner);
                }
            }
        }
    }

    // Never met, or only drew: alphabetical order decides.
    leaders
        .into_iter()
        .min_by(|a, b| (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name)))
        .ok_or(TournamentError::InvalidRoster { count: 0 })
}
