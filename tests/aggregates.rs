use std::path::PathBuf;

use football_report::dataset::{self, FullTimeResult, MatchRecord};
use football_report::teams::aggregate_teams;
use football_report::yearly::aggregate_seasons;

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn record(
    season: &str,
    home: &str,
    away: &str,
    home_goals: u32,
    away_goals: u32,
    code: &str,
) -> MatchRecord {
    MatchRecord {
        season: season.to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_goals,
        away_goals,
        result: FullTimeResult::from_code(code).expect("known result code"),
    }
}

#[test]
fn yearly_scenario_two_rows() {
    let records = vec![
        record("2020", "TeamA", "TeamB", 2, 1, "H"),
        record("2020", "TeamB", "TeamA", 0, 0, "D"),
    ];
    let rows = aggregate_seasons(&records);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].season, "2020");
    assert_eq!(rows[0].total_goals, 3);
    assert_eq!(rows[0].home_wins, 1);
    assert_eq!(rows[0].away_wins, 0);
    assert_eq!(rows[0].win_difference, 1);
}

#[test]
fn fixture_skips_bad_rows_but_keeps_scanning() {
    let scan = dataset::load_match_records(&fixture_path("results_small.csv"))
        .expect("fixture should load");
    // One non-integer goal value and one unnamed team.
    assert_eq!(scan.rows_skipped, 2);
    assert_eq!(scan.records.len(), 5);
    // The row after the bad one was still processed.
    let last = scan.records.last().expect("records present");
    assert_eq!(last.season, "2020");
    assert_eq!(last.home_team, "Chelsea");
    assert_eq!(last.result, FullTimeResult::Home);
}

#[test]
fn fixture_yearly_totals() {
    let scan = dataset::load_match_records(&fixture_path("results_small.csv"))
        .expect("fixture should load");
    let rows = aggregate_seasons(&scan.records);

    let seasons: Vec<&str> = rows.iter().map(|r| r.season.as_str()).collect();
    assert_eq!(seasons, vec!["2019", "2020"]);

    assert_eq!(rows[0].total_goals, 9);
    assert_eq!(rows[0].home_wins, 2);
    assert_eq!(rows[0].away_wins, 0);
    assert_eq!(rows[0].win_difference, 2);

    assert_eq!(rows[1].total_goals, 5);
    assert_eq!(rows[1].home_wins, 1);
    assert_eq!(rows[1].away_wins, 1);
    assert_eq!(rows[1].win_difference, 0);
}

#[test]
fn fixture_goal_totals_match_row_sum() {
    let scan = dataset::load_match_records(&fixture_path("results_small.csv"))
        .expect("fixture should load");
    let rows = aggregate_seasons(&scan.records);
    let aggregated: u64 = rows.iter().map(|r| r.total_goals).sum();
    let per_row: u64 = scan
        .records
        .iter()
        .map(|r| u64::from(r.home_goals) + u64::from(r.away_goals))
        .sum();
    assert_eq!(aggregated, per_row);
}

#[test]
fn fixture_team_table() {
    let scan = dataset::load_match_records(&fixture_path("results_small.csv"))
        .expect("fixture should load");
    let rows = aggregate_teams(&scan.records);

    let teams: Vec<&str> = rows.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(teams, vec!["Arsenal", "Chelsea", "Spurs"]);

    let arsenal = &rows[0];
    assert_eq!(arsenal.home_played, 2);
    assert_eq!(arsenal.home_wins, 1);
    assert_eq!(arsenal.home_win_rate, "50.00");
    assert_eq!(arsenal.away_played, 2);
    assert_eq!(arsenal.away_wins, 1);
    assert_eq!(arsenal.away_win_rate, "50.00");

    let chelsea = &rows[1];
    assert_eq!(chelsea.home_win_rate, "100.00");
    assert_eq!(chelsea.away_played, 1);
    assert_eq!(chelsea.away_win_rate, "0.00");

    let spurs = &rows[2];
    assert_eq!(spurs.home_played, 1);
    assert_eq!(spurs.home_win_rate, "0.00");
    assert_eq!(spurs.away_played, 2);
    assert_eq!(spurs.away_win_rate, "0.00");
}

#[test]
fn home_games_played_match_home_appearances() {
    let scan = dataset::load_match_records(&fixture_path("results_small.csv"))
        .expect("fixture should load");
    let rows = aggregate_teams(&scan.records);
    for row in &rows {
        let appearances = scan
            .records
            .iter()
            .filter(|r| r.home_team == row.team)
            .count() as u64;
        assert_eq!(row.home_played, appearances, "team {}", row.team);
    }
}

#[test]
fn win_rates_stay_in_bounds() {
    let scan = dataset::load_match_records(&fixture_path("results_small.csv"))
        .expect("fixture should load");
    for row in aggregate_teams(&scan.records) {
        for rate in [&row.home_win_rate, &row.away_win_rate] {
            let value: f64 = rate.parse().expect("rate should be numeric");
            assert!((0.0..=100.0).contains(&value), "rate {value} out of bounds");
        }
    }
}

#[test]
fn rerun_is_deterministic() {
    let path = fixture_path("results_small.csv");
    let first = dataset::load_match_records(&path).expect("fixture should load");
    let second = dataset::load_match_records(&path).expect("fixture should load");
    assert_eq!(first.records, second.records);
    assert_eq!(
        aggregate_seasons(&first.records),
        aggregate_seasons(&second.records)
    );
    assert_eq!(
        aggregate_teams(&first.records),
        aggregate_teams(&second.records)
    );
}
