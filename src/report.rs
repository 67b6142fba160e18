use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook, Worksheet};

use crate::teams::{TEAM_HEADER, TeamRow};
use crate::yearly::{SEASON_HEADER, SeasonRow};

pub const RAW_SHEET: &str = "Raw Football Results";
pub const YEARLY_SHEET: &str = "Yearly Analysis";
pub const TEAM_SHEET: &str = "Team Win Rates";

const HEADER_FILL: u32 = 0x1F4E78;
const HEADER_FONT: u32 = 0xFFFFFF;
const BAND_FILL: u32 = 0xDDEBF7;

/// Owns the workbook across the three sheet-creation steps and saves once.
pub struct ReportBuilder {
    workbook: Workbook,
    styles: SheetStyles,
    sheets: Vec<&'static str>,
}

struct SheetStyles {
    header: Format,
    band: Format,
}

impl SheetStyles {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(HEADER_FONT)
                .set_background_color(HEADER_FILL),
            band: Format::new().set_background_color(BAND_FILL),
        }
    }

    /// Header row gets the navy fill; data rows are banded starting with
    /// the tinted band on the first data row.
    fn for_row(&self, row_idx: u32) -> Option<&Format> {
        if row_idx == 0 {
            Some(&self.header)
        } else if (row_idx - 1) % 2 == 0 {
            Some(&self.band)
        } else {
            None
        }
    }
}

/// Tracks the longest rendered value per column so widths can be set once
/// after the sheet is filled.
#[derive(Default)]
struct ColumnWidths {
    longest: Vec<usize>,
}

impl ColumnWidths {
    fn note(&mut self, col: usize, value: &str) {
        if self.longest.len() <= col {
            self.longest.resize(col + 1, 0);
        }
        if value.len() > self.longest[col] {
            self.longest[col] = value.len();
        }
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<()> {
        for (col, longest) in self.longest.iter().enumerate() {
            sheet
                .set_column_width(col as u16, (*longest + 2) as f64)
                .with_context(|| format!("set width of column {col}"))?;
        }
        Ok(())
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            styles: SheetStyles::new(),
            sheets: Vec::new(),
        }
    }

    /// Sheet 1: every csv row verbatim, styled only.
    pub fn add_raw_sheet(&mut self, rows: &[Vec<String>]) -> Result<()> {
        let sheet = self.workbook.add_worksheet();
        sheet.set_name(RAW_SHEET).context("name raw sheet")?;
        self.sheets.push(RAW_SHEET);

        let mut widths = ColumnWidths::default();
        for (row_idx, row) in rows.iter().enumerate() {
            let row_idx = row_idx as u32;
            let format = self.styles.for_row(row_idx);
            for (col_idx, value) in row.iter().enumerate() {
                write_text(sheet, format, row_idx, col_idx as u16, value, &mut widths)?;
            }
        }
        widths.apply(sheet)
    }

    /// Sheet 2: per-season aggregates plus the two charts.
    pub fn add_yearly_sheet(&mut self, rows: &[SeasonRow]) -> Result<()> {
        let sheet = self.workbook.add_worksheet();
        sheet.set_name(YEARLY_SHEET).context("name yearly sheet")?;
        self.sheets.push(YEARLY_SHEET);

        let mut widths = ColumnWidths::default();
        write_header(sheet, &self.styles, &SEASON_HEADER, &mut widths)?;

        for (idx, row) in rows.iter().enumerate() {
            let row_idx = (idx + 1) as u32;
            let format = self.styles.for_row(row_idx);
            write_text(sheet, format, row_idx, 0, &row.season, &mut widths)?;
            write_number(sheet, format, row_idx, 1, row.total_goals as f64, &mut widths)?;
            write_number(sheet, format, row_idx, 2, row.home_wins as f64, &mut widths)?;
            write_number(sheet, format, row_idx, 3, row.away_wins as f64, &mut widths)?;
            write_number(
                sheet,
                format,
                row_idx,
                4,
                row.win_difference as f64,
                &mut widths,
            )?;
        }
        widths.apply(sheet)?;

        if !rows.is_empty() {
            let last_row = rows.len() as u32;
            let goals = goals_chart(last_row);
            let difference = win_difference_chart(last_row);
            sheet
                .insert_chart(1, 6, &goals)
                .context("insert goals chart")?;
            sheet
                .insert_chart(17, 6, &difference)
                .context("insert win difference chart")?;
        }
        Ok(())
    }

    /// Sheet 3: per-team win-rate table.
    pub fn add_team_sheet(&mut self, rows: &[TeamRow]) -> Result<()> {
        let sheet = self.workbook.add_worksheet();
        sheet.set_name(TEAM_SHEET).context("name team sheet")?;
        self.sheets.push(TEAM_SHEET);

        let mut widths = ColumnWidths::default();
        write_header(sheet, &self.styles, &TEAM_HEADER, &mut widths)?;

        for (idx, row) in rows.iter().enumerate() {
            let row_idx = (idx + 1) as u32;
            let format = self.styles.for_row(row_idx);
            write_text(sheet, format, row_idx, 0, &row.team, &mut widths)?;
            write_number(sheet, format, row_idx, 1, row.home_played as f64, &mut widths)?;
            write_number(sheet, format, row_idx, 2, row.home_wins as f64, &mut widths)?;
            write_text(sheet, format, row_idx, 3, &row.home_win_rate, &mut widths)?;
            write_number(sheet, format, row_idx, 4, row.away_played as f64, &mut widths)?;
            write_number(sheet, format, row_idx, 5, row.away_wins as f64, &mut widths)?;
            write_text(sheet, format, row_idx, 6, &row.away_win_rate, &mut widths)?;
        }
        widths.apply(sheet)
    }

    /// Names of the sheets added so far, in workbook order.
    pub fn sheet_names(&self) -> &[&'static str] {
        &self.sheets
    }

    pub fn save(mut self, path: &Path) -> Result<()> {
        self.workbook
            .save(path)
            .with_context(|| format!("failed writing workbook to {}", path.display()))?;
        Ok(())
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Column chart of total goals per season, categories from the season column.
fn goals_chart(last_row: u32) -> Chart {
    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_name((YEARLY_SHEET, 0, 1))
        .set_values((YEARLY_SHEET, 1, 1, last_row, 1))
        .set_categories((YEARLY_SHEET, 1, 0, last_row, 0));
    chart.title().set_name("Total Goals Scored per Season");
    chart.x_axis().set_name("Season");
    chart.y_axis().set_name("Goals");
    chart
}

/// Line chart of home-win minus away-win count per season.
fn win_difference_chart(last_row: u32) -> Chart {
    let mut chart = Chart::new(ChartType::Line);
    chart
        .add_series()
        .set_name((YEARLY_SHEET, 0, 4))
        .set_values((YEARLY_SHEET, 1, 4, last_row, 4))
        .set_categories((YEARLY_SHEET, 1, 0, last_row, 0));
    chart
        .title()
        .set_name("Home Win vs Away Win Difference per Season");
    chart.x_axis().set_name("Season");
    chart
        .y_axis()
        .set_name("Difference (Home Wins - Away Wins)");
    chart
}

fn write_header(
    sheet: &mut Worksheet,
    styles: &SheetStyles,
    titles: &[&str],
    widths: &mut ColumnWidths,
) -> Result<()> {
    let format = styles.for_row(0);
    for (col_idx, title) in titles.iter().enumerate() {
        write_text(sheet, format, 0, col_idx as u16, title, widths)?;
    }
    Ok(())
}

fn write_text(
    sheet: &mut Worksheet,
    format: Option<&Format>,
    row: u32,
    col: u16,
    value: &str,
    widths: &mut ColumnWidths,
) -> Result<()> {
    widths.note(col as usize, value);
    match format {
        Some(format) => sheet.write_string_with_format(row, col, value, format),
        None => sheet.write_string(row, col, value),
    }
    .with_context(|| format!("write cell ({row},{col})"))?;
    Ok(())
}

fn write_number(
    sheet: &mut Worksheet,
    format: Option<&Format>,
    row: u32,
    col: u16,
    value: f64,
    widths: &mut ColumnWidths,
) -> Result<()> {
    widths.note(col as usize, &value.to_string());
    match format {
        Some(format) => sheet.write_number_with_format(row, col, value, format),
        None => sheet.write_number(row, col, value),
    }
    .with_context(|| format!("write cell ({row},{col})"))?;
    Ok(())
}
