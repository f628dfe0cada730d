use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::aggregate::weighted_average;
use crate::types::StateRecord;

pub const CSV_HEADER: &str = "name,fips,population,households,median_income";

/// How the collected records are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One row per state
    Csv,
    /// The household-weighted average median income
    Averages,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("you must specify an output format with --format: csv or averages")]
    MissingFormat,
    #[error("unknown output format '{0}': you must specify csv or averages")]
    UnknownFormat(String),
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "averages" => Ok(Self::Averages),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Averages => write!(f, "averages"),
        }
    }
}

impl OutputFormat {
    /// Resolve the `--format` flag. Absent and unrecognised values are both errors.
    pub fn select(flag: Option<&str>) -> Result<Self, ReportError> {
        match flag {
            None => Err(ReportError::MissingFormat),
            Some(s) if s.trim().is_empty() => Err(ReportError::MissingFormat),
            Some(s) => s.parse(),
        }
    }
}

pub fn render(format: OutputFormat, records: &[StateRecord]) -> String {
    match format {
        OutputFormat::Csv => render_csv(records),
        OutputFormat::Averages => render_average(records),
    }
}

pub fn render_csv(records: &[StateRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&r.name),
            csv_field(&r.fips),
            r.population,
            r.households,
            r.median_income
        ));
    }

    out
}

/// Two decimal places, or `no data` when nothing can be averaged
pub fn render_average(records: &[StateRecord]) -> String {
    match weighted_average(records) {
        Some(avg) => format!("{:.2}\n", avg),
        None => "no data\n".to_string(),
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
