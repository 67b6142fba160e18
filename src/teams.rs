use std::collections::HashMap;

use crate::dataset::{FullTimeResult, MatchRecord};

pub const TEAM_HEADER: [&str; 7] = [
    "Team",
    "Home Games Played",
    "Home Wins",
    "Home Win Rate (%)",
    "Away Games Played",
    "Away Wins",
    "Away Win Rate (%)",
];

/// Running totals for one team, zero-initialized on first access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamTotals {
    pub home_played: u64,
    pub home_wins: u64,
    pub away_played: u64,
    pub away_wins: u64,
}

impl TeamTotals {
    pub fn home_win_rate(&self) -> f64 {
        win_rate(self.home_wins, self.home_played)
    }

    pub fn away_win_rate(&self) -> f64 {
        win_rate(self.away_wins, self.away_played)
    }
}

fn win_rate(wins: u64, played: u64) -> f64 {
    if played == 0 {
        0.0
    } else {
        wins as f64 / played as f64 * 100.0
    }
}

/// One emitted table row. Win rates carry the two-decimal rendering the
/// sheet shows, so the data contract is the formatted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRow {
    pub team: String,
    pub home_played: u64,
    pub home_wins: u64,
    pub home_win_rate: String,
    pub away_played: u64,
    pub away_wins: u64,
    pub away_win_rate: String,
}

/// Single pass over the records, emitted sorted by team name.
pub fn aggregate_teams(records: &[MatchRecord]) -> Vec<TeamRow> {
    let mut totals: HashMap<String, TeamTotals> = HashMap::new();
    for record in records {
        let home = totals.entry(record.home_team.clone()).or_default();
        home.home_played += 1;
        if record.result == FullTimeResult::Home {
            home.home_wins += 1;
        }

        let away = totals.entry(record.away_team.clone()).or_default();
        away.away_played += 1;
        if record.result == FullTimeResult::Away {
            away.away_wins += 1;
        }
    }

    let mut rows = totals
        .into_iter()
        .map(|(team, totals)| TeamRow {
            team,
            home_played: totals.home_played,
            home_wins: totals.home_wins,
            home_win_rate: format!("{:.2}", totals.home_win_rate()),
            away_played: totals.away_played,
            away_wins: totals.away_wins,
            away_win_rate: format!("{:.2}", totals.away_win_rate()),
        })
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| a.team.cmp(&b.team));
    rows
}
