use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;

use football_report::export::{self, ExportReport};

const DEFAULT_INPUT_CSV: &str = "results.csv";
const DEFAULT_OUTPUT_XLSX: &str = "football_analysis_report.xlsx";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let input = parse_path_arg("--input")
        .or_else(|| path_from_env("REPORT_INPUT_CSV"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_CSV));
    let output = parse_path_arg("--out")
        .or_else(|| path_from_env("REPORT_OUTPUT_XLSX"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_XLSX));

    let report = export::export_report(&input, &output)?;
    print_summary(&report, &output);
    Ok(())
}

fn print_summary(report: &ExportReport, output: &Path) {
    println!("Report complete at {}", Utc::now().to_rfc3339());
    println!("Workbook: {}", output.display());
    println!("Raw rows: {}", report.raw_rows);
    println!("Seasons: {}", report.seasons);
    println!("Teams: {}", report.teams);
    if report.rows_skipped > 0 {
        println!("Rows skipped: {}", report.rows_skipped);
    }
    if !report.errors.is_empty() {
        println!("Errors: {}", report.errors.len());
        for err in report.errors.iter().take(8) {
            println!(" - {err}");
        }
    }
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(PathBuf::from(next));
        }
    }
    None
}

fn path_from_env(key: &str) -> Option<PathBuf> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
