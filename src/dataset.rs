use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use thiserror::Error;

pub const SEASON_COLUMN: &str = "Season";
pub const HOME_TEAM_COLUMN: &str = "HomeTeam";
pub const AWAY_TEAM_COLUMN: &str = "AwayTeam";
pub const HOME_GOALS_COLUMN: &str = "FTHG";
pub const AWAY_GOALS_COLUMN: &str = "FTAG";
pub const RESULT_COLUMN: &str = "FTR";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("input csv not found: {0}")]
    MissingFile(String),

    #[error("missing expected column in csv header: {0}")]
    MissingColumn(&'static str),
}

/// Full-time result code for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullTimeResult {
    Home,
    Away,
    Draw,
}

impl FullTimeResult {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "H" => Some(Self::Home),
            "A" => Some(Self::Away),
            "D" => Some(Self::Draw),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub season: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub result: FullTimeResult,
}

/// Column indices resolved from the csv header, validated once per scan.
#[derive(Debug, Clone, Copy)]
pub struct ResultsSchema {
    season: usize,
    home_team: usize,
    away_team: usize,
    home_goals: usize,
    away_goals: usize,
    result: usize,
}

impl ResultsSchema {
    pub fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        Ok(Self {
            season: find(SEASON_COLUMN)?,
            home_team: find(HOME_TEAM_COLUMN)?,
            away_team: find(AWAY_TEAM_COLUMN)?,
            home_goals: find(HOME_GOALS_COLUMN)?,
            away_goals: find(AWAY_GOALS_COLUMN)?,
            result: find(RESULT_COLUMN)?,
        })
    }

    /// Parse one data row. Returns None for rows that must be skipped:
    /// short rows, non-integer goal counts, unknown result codes, and
    /// rows with an unnamed home or away team.
    pub fn parse_record(&self, row: &StringRecord) -> Option<MatchRecord> {
        let season = row.get(self.season)?.trim();
        let home_team = row.get(self.home_team)?.trim();
        let away_team = row.get(self.away_team)?.trim();
        if home_team.is_empty() || away_team.is_empty() {
            return None;
        }
        let home_goals = row.get(self.home_goals)?.trim().parse::<u32>().ok()?;
        let away_goals = row.get(self.away_goals)?.trim().parse::<u32>().ok()?;
        let result = FullTimeResult::from_code(row.get(self.result)?)?;

        Some(MatchRecord {
            season: season.to_string(),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_goals,
            away_goals,
            result,
        })
    }
}

#[derive(Debug)]
pub struct MatchScan {
    pub records: Vec<MatchRecord>,
    pub rows_skipped: usize,
}

/// Validate the header and parse every data row, skipping rows that fail.
pub fn load_match_records(path: &Path) -> Result<MatchScan> {
    let mut reader = open_reader(path)?;
    let headers = reader
        .headers()
        .with_context(|| format!("read csv header from {}", path.display()))?
        .clone();
    let schema = ResultsSchema::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut rows_skipped = 0usize;
    for row in reader.records() {
        let Ok(row) = row else {
            rows_skipped += 1;
            continue;
        };
        match schema.parse_record(&row) {
            Some(record) => records.push(record),
            None => rows_skipped += 1,
        }
    }

    Ok(MatchScan {
        records,
        rows_skipped,
    })
}

/// Every row of the file verbatim (header included), for the raw data sheet.
/// No schema requirement here: malformed rows still land on the sheet.
pub fn read_raw_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    if !path.exists() {
        return Err(DatasetError::MissingFile(path.display().to_string()).into());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open csv {}", path.display()))?;

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("read csv row from {}", path.display()))?;
        rows.push(row.iter().map(|field| field.to_string()).collect());
    }
    Ok(rows)
}

fn open_reader(path: &Path) -> Result<Reader<File>> {
    if !path.exists() {
        return Err(DatasetError::MissingFile(path.display().to_string()).into());
    }
    ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open csv {}", path.display()))
}
