use std::path::Path;

use anyhow::Result;

use crate::dataset::{self, DatasetError};
use crate::report::ReportBuilder;
use crate::teams;
use crate::yearly;

/// Outcome of one report run. Step failures end up in `errors`; counts stay
/// zero for the steps that failed.
#[derive(Debug)]
pub struct ExportReport {
    pub raw_rows: usize,
    pub seasons: usize,
    pub teams: usize,
    pub rows_skipped: usize,
    pub errors: Vec<String>,
}

/// Build the three-sheet workbook and save it to `output`.
///
/// A missing input file aborts the whole run before any sheet is created.
/// After that the three sheet-creation steps are wrapped independently: a
/// failed step is recorded and the remaining steps still run, and the
/// workbook is saved with whichever sheets succeeded.
pub fn export_report(input: &Path, output: &Path) -> Result<ExportReport> {
    if !input.exists() {
        return Err(DatasetError::MissingFile(input.display().to_string()).into());
    }

    let mut report = ReportBuilder::new();
    let mut errors = Vec::new();
    let mut raw_rows = 0usize;
    let mut seasons = 0usize;
    let mut team_count = 0usize;
    let mut rows_skipped = 0usize;

    match raw_data_step(input, &mut report) {
        Ok(count) => raw_rows = count,
        Err(err) => errors.push(format!("raw data sheet: {err}")),
    }

    match yearly_step(input, &mut report) {
        Ok((count, skipped)) => {
            seasons = count;
            rows_skipped = skipped;
        }
        Err(err) => errors.push(format!("yearly analysis sheet: {err}")),
    }

    match team_step(input, &mut report) {
        Ok((count, skipped)) => {
            team_count = count;
            rows_skipped = skipped;
        }
        Err(err) => errors.push(format!("team analysis sheet: {err}")),
    }

    report.save(output)?;

    Ok(ExportReport {
        raw_rows,
        seasons,
        teams: team_count,
        rows_skipped,
        errors,
    })
}

fn raw_data_step(input: &Path, report: &mut ReportBuilder) -> Result<usize> {
    let rows = dataset::read_raw_rows(input)?;
    report.add_raw_sheet(&rows)?;
    Ok(rows.len())
}

fn yearly_step(input: &Path, report: &mut ReportBuilder) -> Result<(usize, usize)> {
    let scan = dataset::load_match_records(input)?;
    let rows = yearly::aggregate_seasons(&scan.records);
    report.add_yearly_sheet(&rows)?;
    Ok((rows.len(), scan.rows_skipped))
}

fn team_step(input: &Path, report: &mut ReportBuilder) -> Result<(usize, usize)> {
    let scan = dataset::load_match_records(input)?;
    let rows = teams::aggregate_teams(&scan.records);
    report.add_team_sheet(&rows)?;
    Ok((rows.len(), scan.rows_skipped))
}
