//! CSV loading for `date,rent` files.
//!
//! Every row is parsed into `Result<DataPoint, RowParseError>`; nothing is
//! coerced silently. What happens to a rejected row is decided by
//! [`RowErrorPolicy`].

mod row;

pub use row::{RawRentRow, RowParseError, parse_row};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataPoint, RentSeries};
use crate::error::{ChartError, ChartResult};

/// Default `chrono` pattern for the `date` column (`MM/DD/YYYY`).
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// What to do with a row that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowErrorPolicy {
    /// Log the row, report it in [`LoadReport::rejected`], keep loading.
    #[default]
    Skip,
    /// Abort the load with [`ChartError::Row`].
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvLoadOptions {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub error_policy: RowErrorPolicy,
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,
}

impl Default for CsvLoadOptions {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            error_policy: RowErrorPolicy::default(),
            delimiter: default_delimiter(),
        }
    }
}

impl CsvLoadOptions {
    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: RowErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

fn default_delimiter() -> u8 {
    b','
}

/// A row that failed validation, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    pub line: u64,
    pub error: RowParseError,
}

/// Result of a CSV load: the canonical series and any skipped rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub series: RentSeries,
    pub rejected: Vec<RejectedRow>,
}

impl LoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub fn load_from_path(path: impl AsRef<Path>, options: &CsvLoadOptions) -> ChartResult<LoadReport> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading rent csv");
    let file = File::open(path)?;
    load_from_reader(file, options)
}

pub fn load_from_reader<R: Read>(reader: R, options: &CsvLoadOptions) -> ChartResult<LoadReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut points: Vec<DataPoint> = Vec::new();
    let mut rejected: Vec<RejectedRow> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let parsed = record
            .deserialize::<RawRentRow>(Some(&headers))
            .map_err(|err| RowParseError::Malformed {
                message: err.to_string(),
            })
            .and_then(|raw| parse_row(&raw, &options.date_format));

        match parsed {
            Ok(point) => points.push(point),
            Err(error) => match options.error_policy {
                RowErrorPolicy::Fail => return Err(ChartError::Row { line, source: error }),
                RowErrorPolicy::Skip => {
                    warn!(line, error = %error, "skipping rent csv row");
                    rejected.push(RejectedRow { line, error });
                }
            },
        }
    }

    let series = RentSeries::new(points);
    debug!(
        loaded = series.len(),
        rejected = rejected.len(),
        "rent csv loaded"
    );
    Ok(LoadReport { series, rejected })
}
