//! Swiss pairing: order the field, then greedily pair avoiding rematches.

use crate::models::{Match, Player, Tournament, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Build the matches for the next round and record the new pairs in the
/// tournament's history.
///
/// 1. Roster must be even.
/// 2. Round 1: shuffle the whole field. Later rounds: sort by points
///    descending, shuffling each group of equal-points players so the order
///    inside a score group carries no bias.
/// 3. Walk the ordered field: pair the front player with the first opponent
///    they have not faced yet, falling back to the first remaining player
///    when everyone left is a rematch.
///
/// The fallback means a rematch is possible once a player has exhausted the
/// field; there is no backtracking search for a rematch-free matching.
pub(crate) fn pair_players(tournament: &mut Tournament) -> Result<Vec<Match>, TournamentError> {
    let count = tournament.players.len();
    if count == 0 || count % 2 != 0 {
        return Err(TournamentError::InvalidRoster { count });
    }

    let mut rng = rand::thread_rng();
    // Ordering works on a copy: the roster keeps its registration order,
    // which standings rely on for tie display.
    let mut ordered = tournament.players.clone();
    if tournament.current_round_index == 0 {
        log::debug!("pairing round 1: random order");
        ordered.shuffle(&mut rng);
    } else {
        log::debug!(
            "pairing round {}: by points, shuffled within score groups",
            tournament.current_round_index + 1
        );
        sort_for_pairing(&mut ordered, &mut rng);
    }

    let mut remaining = ordered;
    let mut matches = Vec::with_capacity(count / 2);
    while !remaining.is_empty() {
        let p1 = remaining.remove(0);
        // First opponent p1 has not met; index 0 when everyone is a rematch.
        let partner_idx = remaining
            .iter()
            .position(|p2| !tournament.history.contains(&p1.national_id, &p2.national_id))
            .unwrap_or(0);
        let p2 = remaining.remove(partner_idx);
        tournament.history.record(&p1.national_id, &p2.national_id);
        matches.push(Match::new(p1.national_id, p2.national_id));
    }

    Ok(matches)
}

/// Sort by points descending, then shuffle each maximal run of players with
/// the same score, keeping the runs themselves in order.
fn sort_for_pairing<R: Rng>(players: &mut [Player], rng: &mut R) {
    players.sort_by(|a, b| b.points.total_cmp(&a.points));
    let mut i = 0;
    while i < players.len() {
        let mut j = i + 1;
        while j < players.len() && players[j].points == players[i].points {
            j += 1;
        }
        players[i..j].shuffle(rng);
        i = j;
    }
}
