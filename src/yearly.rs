use std::collections::HashMap;

use crate::dataset::{FullTimeResult, MatchRecord};

pub const SEASON_HEADER: [&str; 5] = [
    "Season",
    "Total Goals",
    "Home Wins",
    "Away Wins",
    "Win Difference",
];

/// Running totals for one season, zero-initialized on first access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonTotals {
    pub total_goals: u64,
    pub home_wins: u64,
    pub away_wins: u64,
}

impl SeasonTotals {
    pub fn win_difference(&self) -> i64 {
        self.home_wins as i64 - self.away_wins as i64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRow {
    pub season: String,
    pub total_goals: u64,
    pub home_wins: u64,
    pub away_wins: u64,
    pub win_difference: i64,
}

/// Single pass over the records, emitted sorted by season label.
pub fn aggregate_seasons(records: &[MatchRecord]) -> Vec<SeasonRow> {
    let mut totals: HashMap<String, SeasonTotals> = HashMap::new();
    for record in records {
        let entry = totals.entry(record.season.clone()).or_default();
        entry.total_goals += u64::from(record.home_goals) + u64::from(record.away_goals);
        match record.result {
            FullTimeResult::Home => entry.home_wins += 1,
            FullTimeResult::Away => entry.away_wins += 1,
            FullTimeResult::Draw => {}
        }
    }

    let mut rows = totals
        .into_iter()
        .map(|(season, totals)| SeasonRow {
            season,
            total_goals: totals.total_goals,
            home_wins: totals.home_wins,
            away_wins: totals.away_wins,
            win_difference: totals.win_difference(),
        })
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| a.season.cmp(&b.season));
    rows
}
