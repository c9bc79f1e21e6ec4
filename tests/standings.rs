//! Integration tests for the standings facade and league JSON loading.

use chrono::{TimeZone, Utc};
use league_standings_web::{
    aggregate, compute_standings, rank_stats, resolve_rows, Division, GameMatch, League, MatchLog,
    Player, Roster, StandingsError, FULL_NET, NET_ONLY, WINS_FIRST,
};

fn roster(players: &[(&str, &str, Division)]) -> Roster {
    players
        .iter()
        .map(|(id, name, d)| (id.to_string(), Player::new(*name, *d)))
        .collect()
}

fn played(p1: &str, p2: &str, score: &str, towers: &str) -> GameMatch {
    GameMatch::new(p1, p2, Utc.with_ymd_and_hms(2025, 12, 3, 12, 30, 0).unwrap()).with_result(score, towers)
}

fn log(games: Vec<GameMatch>) -> MatchLog {
    games
        .into_iter()
        .enumerate()
        .map(|(i, g)| ((i + 1).to_string(), g))
        .collect()
}

fn order(rows: &[league_standings_web::StandingRow]) -> Vec<(u32, &str)> {
    rows.iter().map(|r| (r.rank, r.player_id.as_str())).collect()
}

#[test]
fn division_one_summary_table() {
    let r = roster(&[("P1", "Alice", Division::One), ("P2", "Bob", Division::One)]);
    let games = log(vec![played("P2", "P1", "1-3", "2-5")]);

    let rows = compute_standings(&r, &games, Division::One, &NET_ONLY).unwrap();

    assert_eq!(order(&rows), vec![(1, "P1"), (2, "P2")]);
    assert_eq!(rows[0].display_name, "Alice");
    assert_eq!(rows[0].stats.games_played, 1);
    assert_eq!(rows[0].stats.rubbers_played, 4);
    assert_eq!(rows[0].stats.towers_net, 3);
    assert_eq!(rows[1].stats.towers_net, -3);
}

#[test]
fn division_one_table_never_shares_ranks() {
    let r = roster(&[("A", "A", Division::One), ("B", "B", Division::One), ("C", "C", Division::One)]);
    let rows = compute_standings(&r, &MatchLog::new(), Division::One, &NET_ONLY).unwrap();
    assert_eq!(order(&rows), vec![(1, "A"), (2, "B"), (3, "C")]);
}

#[test]
fn full_tie_keeps_input_order_and_shares_rank() {
    let r = roster(&[("P1", "Alice", Division::Two), ("P2", "Bob", Division::Two)]);
    let games = log(vec![played("P2", "P1", "2-2", "4-4")]);

    let rows = compute_standings(&r, &games, Division::Two, &FULL_NET).unwrap();

    assert_eq!(order(&rows), vec![(1, "P1"), (1, "P2")]);
    assert!(rows.iter().all(|row| row.stats.games_won == 0 && row.stats.games_lost == 0));
}

#[test]
fn profiles_choose_between_division_two_orders() {
    let r = roster(&[
        ("G", "Grinder", Division::Two),
        ("S", "Sharp", Division::Two),
        ("X", "Punchbag", Division::Two),
        ("Y", "Other", Division::Two),
    ]);
    let games = log(vec![
        played("G", "X", "3-2", "3-2"),
        played("G", "X", "3-2", "3-2"),
        played("G", "S", "0-3", "0-3"),
        played("S", "X", "3-0", "3-0"),
        played("Y", "G", "3-0", "3-0"),
    ]);

    let full = compute_standings(&r, &games, Division::Two, &FULL_NET).unwrap();
    let wins = compute_standings(&r, &games, Division::Two, &WINS_FIRST).unwrap();

    // S: 2-0, Y: 1-0, G: 2-2, X: 0-3 in games.
    assert_eq!(full[0].player_id, "S");
    assert_eq!(wins[0].player_id, "S");
    assert_eq!(full[1].player_id, "Y");
    // Wins-first puts G's two wins ahead of Y's single one.
    assert_eq!(wins[1].player_id, "G");
}

#[test]
fn inactive_players_are_ranked_and_flagged() {
    let mut r = roster(&[("A", "Active", Division::Two)]);
    r.insert("Z".to_string(), Player::new("Retired", Division::Two).inactive());
    let games = log(vec![played("Z", "A", "3-0", "2-0")]);

    let rows = compute_standings(&r, &games, Division::Two, &FULL_NET).unwrap();
    assert_eq!(rows[0].player_id, "Z");
    assert!(!rows[0].is_active);
    assert!(rows[1].is_active);
}

#[test]
fn player_outside_roster_only_loses_their_side() {
    let r = roster(&[("P1", "Alice", Division::Two)]);
    let games = log(vec![played("ghost", "P1", "0-3", "1-6")]);

    let rows = compute_standings(&r, &games, Division::Two, &FULL_NET).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stats.games_won, 1);
    assert_eq!(rows[0].stats.towers_won, 6);
}

#[test]
fn unplayed_match_contributes_nothing() {
    let r = roster(&[("P1", "Alice", Division::One), ("P2", "Bob", Division::One)]);
    let mut half = GameMatch::new("P1", "P2", Utc.with_ymd_and_hms(2025, 12, 3, 12, 30, 0).unwrap());
    half.score = Some("1-0".to_string());
    let games = log(vec![half]);

    let rows = compute_standings(&r, &games, Division::One, &NET_ONLY).unwrap();
    assert!(rows.iter().all(|row| row.stats == Default::default()));
}

#[test]
fn recomputing_gives_identical_output() {
    let r = roster(&[
        ("1", "One", Division::Two),
        ("2", "Two", Division::Two),
        ("3", "Three", Division::Two),
    ]);
    let games = log(vec![
        played("1", "2", "2-2", "3-3"),
        played("3", "1", "1-3", "2-4"),
        played("2", "3", "3-1", "4-2"),
    ]);

    let first = compute_standings(&r, &games, Division::Two, &WINS_FIRST).unwrap();
    let second = compute_standings(&r, &games, Division::Two, &WINS_FIRST).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn removed_player_is_reported_not_blanked() {
    let mut r = roster(&[("P1", "Alice", Division::Two), ("P2", "Bob", Division::Two)]);
    let games = log(vec![played("P1", "P2", "3-0", "3-0")]);

    let ranked = rank_stats(aggregate(&r, &games, Division::Two).unwrap(), &FULL_NET);
    r.remove("P2");

    assert_eq!(
        resolve_rows(&r, ranked),
        Err(StandingsError::UnknownPlayer("P2".to_string()))
    );
}

#[test]
fn malformed_record_fails_the_whole_table() {
    let r = roster(&[("P1", "Alice", Division::Two), ("P2", "Bob", Division::Two)]);
    let games = log(vec![played("P1", "P2", "3-0", "3-0"), played("P1", "P2", "3:0", "3-0")]);
    assert!(matches!(
        compute_standings(&r, &games, Division::Two, &FULL_NET),
        Err(StandingsError::MalformedRecord { .. })
    ));
}

#[test]
fn league_json_in_both_games_formats() {
    let roster_json = r##"{
        "1": { "username": "Alice", "tag": "#AAA", "division": 1, "isActive": true, "trophies": 7000 },
        "2": { "username": "Bob", "tag": "#BBB", "division": 1, "isActive": false, "trophies": 6500 }
    }"##;
    let wrapped = r#"{
        "games": {
            "1": { "player1": "1", "player2": "2", "datetime": "2025-11-30T12:30:00.000Z",
                   "score": "3-1", "towersTakenDown": "5-2", "imageData": null, "imageName": null },
            "2": { "player1": "2", "player2": "1", "datetime": "2025-12-07T12:30:00.000Z",
                   "score": null, "towersTakenDown": null }
        },
        "nextGameId": 9
    }"#;
    let bare = r#"{
        "4": { "player1": "1", "player2": "2", "datetime": "2025-11-30T12:30:00Z",
               "score": "3-1", "towersTakenDown": "5-2" }
    }"#;

    let league = League::from_json(roster_json, wrapped).unwrap();
    assert_eq!(league.games.len(), 2);
    assert_eq!(league.next_game_id, 9);
    assert_eq!(league.roster["1"].division, Division::One);
    assert!(!league.roster["2"].is_active);

    let rows = compute_standings(&league.roster, &league.games, Division::One, &NET_ONLY).unwrap();
    assert_eq!(order(&rows), vec![(1, "1"), (2, "2")]);

    let league = League::from_json(roster_json, bare).unwrap();
    assert_eq!(league.next_game_id, 5);
}

#[test]
fn roster_with_unknown_division_is_rejected() {
    let roster_json = r#"{ "1": { "username": "Alice", "division": 3, "isActive": true } }"#;
    let err = League::from_json(roster_json, "{}").unwrap_err();
    assert!(err.to_string().contains("Division must be 1 or 2"));
}

#[test]
fn entry_form_datetime_without_offset_is_read_as_utc() {
    let roster_json = r#"{
        "1": { "username": "Alice", "division": 2, "isActive": true },
        "2": { "username": "Bob", "division": 2, "isActive": true }
    }"#;
    let games_json = r#"{
        "games": {
            "1": { "player1": "1", "player2": "2", "datetime": "2025-11-30T18:00",
                   "score": "3-1", "towersTakenDown": "5-2" },
            "2": { "player1": "2", "player2": "1", "datetime": "2025-12-07T18:00:30" }
        },
        "nextGameId": 3
    }"#;

    let league = League::from_json(roster_json, games_json).unwrap();
    assert_eq!(league.games["1"].datetime, Utc.with_ymd_and_hms(2025, 11, 30, 18, 0, 0).unwrap());
    assert_eq!(league.games["2"].datetime, Utc.with_ymd_and_hms(2025, 12, 7, 18, 0, 30).unwrap());
    assert_eq!(league.next_game_id, 3);

    let rows = compute_standings(&league.roster, &league.games, Division::Two, &FULL_NET).unwrap();
    assert_eq!(order(&rows), vec![(1, "1"), (2, "2")]);
}

#[test]
fn bad_match_in_wrapped_games_names_the_field() {
    let games_json = r#"{
        "games": { "1": { "player1": "1", "player2": "2", "datetime": "next tuesday" } },
        "nextGameId": 2
    }"#;
    let err = League::from_json("{}", games_json).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("invalid datetime"), "{message}");
    assert!(message.contains("next tuesday"), "{message}");
}

#[test]
fn roster_with_blank_trophies_loads() {
    let roster_json = r#"{
        "1": { "username": "Alice", "division": 1, "isActive": true, "trophies": null },
        "2": { "username": "Bob", "division": 1, "trophies": 6500 }
    }"#;
    let league = League::from_json(roster_json, "{}").unwrap();
    assert_eq!(league.roster["1"].trophies, None);
    assert_eq!(league.roster["2"].trophies, Some(6500));
    assert!(league.roster["2"].is_active);
}
