//! Integration tests for the registry and the persistence snapshot contract.

use chess_tournament::{
    record_results, start_next_round, start_tournament, MatchResult, Player, PlayerRegistry,
    Tournament, TournamentError, TournamentSnapshot,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn club_registry() -> PlayerRegistry {
    let mut registry = PlayerRegistry::new();
    for (id, last, first) in [
        ("AB00001", "Moreau", "Jean"),
        ("AB00002", "Aubry", "Paul"),
        ("AB00003", "Weber", "Karl"),
        ("AB00004", "Petit", "Luc"),
    ] {
        registry
            .register(Player::new(id, last, first, date(1988, 9, 9)))
            .unwrap();
    }
    registry
}

fn mid_tournament(registry: &PlayerRegistry) -> Tournament {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut t = Tournament::with_total_rounds(
        "Autumn Open",
        "Lille",
        date(2026, 10, 3),
        date(2026, 10, 4),
        "Open to all members",
        2,
    );
    t.add_players(registry.players().to_vec()).unwrap();
    start_tournament(&mut t).unwrap();
    record_results(
        &mut t,
        &[
            MatchResult::new(0, 0, 1.0, 0.0),
            MatchResult::new(0, 1, 0.5, 0.5),
        ],
    )
    .unwrap();
    start_next_round(&mut t).unwrap();
    t
}

#[test]
fn registry_enforces_unique_ids() {
    let mut registry = club_registry();
    assert_eq!(
        registry.register(Player::new("AB00001", "Dupont", "Louis", date(2000, 1, 1))),
        Err(TournamentError::DuplicatePlayer("AB00001".into()))
    );
    assert_eq!(registry.len(), 4);

    // Bulk loading keeps the first of two entries sharing an id.
    let loaded = PlayerRegistry::from_players(vec![
        Player::new("AB00001", "Moreau", "Jean", date(1988, 9, 9)),
        Player::new("AB00001", "Dupont", "Louis", date(2000, 1, 1)),
        Player::new("AB00002", "Aubry", "Paul", date(1988, 9, 9)),
    ]);
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get("AB00001").unwrap().last_name, "Moreau");
}

#[test]
fn registry_lists_players_alphabetically() {
    let registry = club_registry();
    let names: Vec<&str> = registry
        .sorted_by_name()
        .iter()
        .map(|p| p.last_name.as_str())
        .collect();
    assert_eq!(names, ["Aubry", "Moreau", "Petit", "Weber"]);
}

#[test]
fn registry_remove_unknown_player_fails() {
    let mut registry = club_registry();
    assert_eq!(
        registry.remove("ZZ99999"),
        Err(TournamentError::PlayerNotFound("ZZ99999".into()))
    );
    let removed = registry.remove("AB00004").unwrap();
    assert_eq!(removed.last_name, "Petit");
    assert_eq!(registry.len(), 3);
}

#[test]
fn snapshot_stores_players_by_id_and_rounds_in_full() {
    let registry = club_registry();
    let t = mid_tournament(&registry);
    let snap = t.snapshot();

    assert_eq!(snap.players, ["AB00001", "AB00002", "AB00003", "AB00004"]);
    assert_eq!(snap.rounds.len(), 2);
    assert_eq!(snap.rounds[0].matches.len(), 2);
    assert!(snap.rounds[0].end_time.is_some());
    assert!(snap.rounds[1].end_time.is_none());
    assert_eq!(snap.history.len(), 4);
}

#[test]
fn restore_rebuilds_an_equivalent_tournament() {
    let registry = club_registry();
    let t = mid_tournament(&registry);

    let restored = t.snapshot().restore(&registry).unwrap();
    assert_eq!(restored, t);
}

#[test]
fn restore_recomputes_points_instead_of_trusting_them() {
    // A registry loaded from storage may carry stale point totals; replaying
    // the recorded scores must win over whatever the registry says.
    let mut registry = club_registry();
    let t = mid_tournament(&registry);
    let mut stale = registry.get("AB00001").unwrap().clone();
    stale.points = 99.0;
    registry.update(stale).unwrap();

    let restored = t.snapshot().restore(&registry).unwrap();
    for p in &t.players {
        assert_eq!(
            restored.player(&p.national_id).unwrap().points,
            p.points,
            "points for {} not replayed from match history",
            p.national_id
        );
    }
}

#[test]
fn restore_fails_on_unknown_player_id() {
    let registry = club_registry();
    let t = mid_tournament(&registry);
    let mut snap = t.snapshot();
    snap.players[0] = "ZZ99999".into();

    assert_eq!(
        snap.restore(&registry),
        Err(TournamentError::PlayerNotFound("ZZ99999".into()))
    );
}

#[test]
fn snapshot_survives_json() {
    let registry = club_registry();
    let t = mid_tournament(&registry);
    let snap = t.snapshot();

    let json = serde_json::to_string(&snap).unwrap();
    let back: TournamentSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
    assert_eq!(back.restore(&registry).unwrap(), t);
}
