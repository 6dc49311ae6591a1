//! Integration tests for standings: merging rounds and ranking.

use rand::Rng;
use tournament_dashboard::logic::check_records;
use tournament_dashboard::models::StatIssue;
use tournament_dashboard::{
    merge_rounds, rank_standings, tournament_standings, PlayerStat, StandingsResponse,
};

/// A consistent record built from results and goals.
fn stat(id: i64, name: &str, wins: u32, draws: u32, losses: u32, gf: u32, ga: u32) -> PlayerStat {
    PlayerStat {
        player_id: id,
        player_name: name.to_string(),
        matches_played: wins + draws + losses,
        wins,
        draws,
        losses,
        goals_scored: gf,
        goals_against: ga,
        goal_difference: i64::from(gf) - i64::from(ga),
        points: wins * 6 + draws * 2,
    }
}

fn random_stats(rng: &mut impl Rng, ids: std::ops::Range<i64>) -> Vec<PlayerStat> {
    ids.map(|id| {
        stat(
            id,
            &format!("P{id}"),
            rng.gen_range(0..4),
            rng.gen_range(0..3),
            rng.gen_range(0..4),
            rng.gen_range(0..12),
            rng.gen_range(0..12),
        )
    })
    .collect()
}

#[test]
fn merge_sums_player_present_in_both_rounds() {
    let round1 = vec![stat(1, "Alex", 2, 0, 1, 6, 4)];
    let round2 = vec![stat(1, "Alex", 1, 1, 0, 3, 2)];

    let merged = merge_rounds([("round1", round1.as_slice()), ("round2", round2.as_slice())]);

    assert_eq!(merged.len(), 1);
    let alex = &merged[0];
    assert_eq!(alex.player_name, "Alex");
    assert_eq!(alex.matches_played, 5);
    assert_eq!(alex.wins, 3);
    assert_eq!(alex.draws, 1);
    assert_eq!(alex.losses, 1);
    assert_eq!(alex.goals_scored, 9);
    assert_eq!(alex.goals_against, 6);
    assert_eq!(alex.goal_difference, 3);
    assert_eq!(alex.points, 20);
}

#[test]
fn merge_keeps_single_round_player_unchanged() {
    let round1 = vec![stat(1, "Alex", 2, 0, 1, 6, 4), stat(2, "Sam", 0, 1, 2, 1, 5)];
    let round2 = vec![stat(1, "Alex", 1, 0, 0, 2, 0), stat(3, "Kim", 1, 0, 0, 3, 1)];

    let merged = merge_rounds([("round1", round1.as_slice()), ("round2", round2.as_slice())]);

    assert_eq!(merged.len(), 3);
    let sam = merged.iter().find(|p| p.player_id == 2).unwrap();
    assert_eq!(sam, &round1[1]);
    let kim = merged.iter().find(|p| p.player_id == 3).unwrap();
    assert_eq!(kim, &round2[1]);
}

#[test]
fn merge_keeps_first_name_seen() {
    let round1 = vec![stat(7, "Jo", 1, 0, 0, 1, 0)];
    let round2 = vec![stat(7, "Joanna", 1, 0, 0, 1, 0)];

    let merged = merge_rounds([("round1", round1.as_slice()), ("round2", round2.as_slice())]);

    assert_eq!(merged[0].player_name, "Jo");
    assert_eq!(merged[0].wins, 2);
}

#[test]
fn merge_of_no_rounds_is_empty() {
    assert!(merge_rounds(std::iter::empty::<(&str, &[PlayerStat])>()).is_empty());
}

#[test]
fn merge_is_additive_and_keeps_invariants() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let round1 = random_stats(&mut rng, 1..9);
        let round2 = random_stats(&mut rng, 4..12);

        let merged = merge_rounds([("round1", round1.as_slice()), ("round2", round2.as_slice())]);

        assert_eq!(merged.len(), 11);
        for p in &merged {
            let a = round1.iter().find(|x| x.player_id == p.player_id);
            let b = round2.iter().find(|x| x.player_id == p.player_id);
            let played = a.map_or(0, |x| x.matches_played) + b.map_or(0, |x| x.matches_played);
            assert_eq!(p.matches_played, played);
            assert!(p.check().is_empty(), "merged record broke an invariant: {p:?}");
        }
    }
}

#[test]
fn rank_orders_by_points_then_goal_difference() {
    // Both on 12 points; Sam has the better goal difference.
    let players = vec![stat(1, "Alex", 2, 0, 1, 5, 4), stat(2, "Sam", 2, 0, 0, 6, 2)];

    let rows = rank_standings(&players);

    assert_eq!(rows[0].stat.player_name, "Sam");
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[1].stat.player_name, "Alex");
    assert_eq!(rows[1].rank, 2);
}

#[test]
fn rank_breaks_full_ties_by_player_id_with_distinct_ranks() {
    let players = vec![stat(9, "Zed", 1, 0, 0, 2, 1), stat(3, "Ann", 1, 0, 0, 2, 1)];

    let rows = rank_standings(&players);

    assert_eq!(rows[0].stat.player_id, 3);
    assert_eq!(rows[1].stat.player_id, 9);
    assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn rank_does_not_touch_input() {
    let players = vec![stat(1, "Low", 0, 0, 1, 0, 1), stat(2, "High", 1, 0, 0, 1, 0)];
    let before = players.clone();
    let _ = rank_standings(&players);
    assert_eq!(players, before);
}

#[test]
fn rank_is_monotone_and_contiguous() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let players = random_stats(&mut rng, 1..16);
        let rows = rank_standings(&players);

        assert_eq!(rows.len(), players.len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, i + 1);
        }
        for pair in rows.windows(2) {
            let (a, b) = (&pair[0].stat, &pair[1].stat);
            assert!(
                a.points > b.points
                    || (a.points == b.points && a.goal_difference >= b.goal_difference),
                "{a:?} ranked above {b:?}"
            );
        }
    }
}

#[test]
fn check_flags_inconsistent_records() {
    let mut bad = stat(4, "Bad", 1, 1, 0, 3, 1);
    bad.points = 9;
    bad.matches_played = 3;

    let warnings = check_records("round1", &[bad, stat(5, "Good", 1, 0, 0, 1, 0)]);

    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.player_id == 4 && w.scope == "round1"));
    assert!(warnings
        .iter()
        .any(|w| w.issue == StatIssue::Points { expected: 8, actual: 9 }));
    assert!(warnings
        .iter()
        .any(|w| w.issue == StatIssue::MatchCount { expected: 2, actual: 3 }));
}

#[test]
fn oversized_counts_are_flagged_not_overflowed() {
    let body = serde_json::json!({
        "round1": [
            {"player_id": 8, "player_name": "Huge", "matches_played": 800000000,
             "wins": 800000000, "draws": 0, "losses": 0, "goals_scored": 0,
             "goals_against": 0, "goal_difference": 0, "points": 1}
        ]
    });
    let response: StandingsResponse = serde_json::from_value(body).unwrap();

    let view = tournament_standings(&response);

    assert_eq!(view.warnings.len(), 1);
    assert_eq!(
        view.warnings[0].issue,
        StatIssue::Points { expected: 4_800_000_000, actual: 1 }
    );
    assert_eq!(view.tournament[0].stat.points, 1);
}

#[test]
fn merge_saturates_at_the_count_limit() {
    let mut big = stat(1, "Big", 0, 0, 0, 0, 0);
    big.goals_scored = u32::MAX - 1;
    let round1 = vec![big];
    let round2 = vec![stat(1, "Big", 0, 0, 0, 5, 0)];

    let merged = merge_rounds([("round1", round1.as_slice()), ("round2", round2.as_slice())]);

    assert_eq!(merged[0].goals_scored, u32::MAX);
}

#[test]
fn tournament_standings_recomputes_from_rounds() {
    let body = serde_json::json!({
        "tournament": [],
        "round1": [
            {"player_id": 1, "player_name": "Alex", "matches_played": 3, "wins": 2, "draws": 0,
             "losses": 1, "goals_scored": 6, "goals_against": 4, "goal_difference": 2,
             "points": 12},
            {"player_id": 2, "player_name": "Sam", "matches_played": 1, "wins": 0, "draws": 0,
             "losses": 1, "goals_scored": 0, "goals_against": 3, "goal_difference": -3, "points": 0}
        ],
        "round2": [
            {"player_id": 1, "player_name": "Alex", "matches_played": 2, "wins": 1, "draws": 1,
             "losses": 0, "goals_scored": 3, "goals_against": 2, "goal_difference": 1, "points": 8}
        ]
    });
    let response: StandingsResponse = serde_json::from_value(body).unwrap();

    let view = tournament_standings(&response);

    assert!(view.warnings.is_empty());
    assert_eq!(view.tournament.len(), 2);
    assert_eq!(view.tournament[0].stat.player_name, "Alex");
    assert_eq!(view.tournament[0].stat.points, 20);
    assert_eq!(view.tournament[1].rank, 2);
    assert_eq!(view.rounds.len(), 2);
    assert_eq!(view.table("round2").unwrap().len(), 1);
    assert!(view.table("round3").is_none());
}

#[test]
fn standings_body_ignores_extra_top_level_keys() {
    let body = serde_json::json!({
        "generated_at": "2024-03-05T12:00:00",
        "season": 3,
        "round1": [
            {"player_id": 1, "player_name": "Alex", "matches_played": 1, "wins": 1, "draws": 0,
             "losses": 0, "goals_scored": 2, "goals_against": 0, "goal_difference": 2,
             "points": 6}
        ]
    });
    let response: StandingsResponse = serde_json::from_value(body).unwrap();

    assert!(response.tournament.is_empty());
    assert_eq!(response.rounds.keys().collect::<Vec<_>>(), vec!["round1"]);

    let broken = serde_json::json!({ "round1": "not a table" });
    assert!(serde_json::from_value::<StandingsResponse>(broken).is_err());
}

#[test]
fn rounds_are_merged_in_numeric_order() {
    let mut response = StandingsResponse::default();
    response
        .rounds
        .insert("round10".to_string(), vec![stat(1, "Late", 1, 0, 0, 1, 0)]);
    response
        .rounds
        .insert("round2".to_string(), vec![stat(1, "Early", 1, 0, 0, 1, 0)]);

    let keys: Vec<&str> = response.ordered_rounds().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["round2", "round10"]);

    let view = tournament_standings(&response);
    assert_eq!(view.tournament[0].stat.player_name, "Early");
    assert_eq!(view.tournament[0].stat.wins, 2);
}

#[test]
fn standings_row_serializes_flat() {
    let rows = rank_standings(&[stat(1, "Alex", 1, 0, 0, 2, 0)]);
    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["rank"], 1);
    assert_eq!(json["player_name"], "Alex");
    assert_eq!(json["points"], 6);
}
