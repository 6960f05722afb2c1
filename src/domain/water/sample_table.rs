// ============================================================
// RAW SAMPLE TABLE
// ============================================================
// Tabular readings handed over by the ingestion layer

use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// A single cell of a sample row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleCell {
    /// Raw value as read from the source
    pub raw: String,

    /// Numeric coercion of `raw`; `None` when the value is empty,
    /// non-numeric or not finite
    numeric: Option<f64>,
}

impl SampleCell {
    /// Create a cell from its raw text
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let numeric = Self::coerce(&raw);
        Self { raw, numeric }
    }

    /// Create a cell from an already numeric reading
    pub fn from_number(value: f64) -> Self {
        Self {
            raw: value.to_string(),
            numeric: value.is_finite().then_some(value),
        }
    }

    /// Numeric value, if the raw text parsed as a finite number
    pub fn numeric(&self) -> Option<f64> {
        self.numeric
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    fn coerce(value: &str) -> Option<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

/// A single row of readings, positionally aligned with the table headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    /// Row index (0-based, data rows only)
    pub index: usize,

    pub cells: Vec<SampleCell>,
}

impl SampleRow {
    pub fn new(index: usize, cells: Vec<SampleCell>) -> Self {
        Self { index, cells }
    }

    /// Cell at `column`; ragged rows yield `None` past their end
    pub fn cell(&self, column: usize) -> Option<&SampleCell> {
        self.cells.get(column)
    }

    /// Numeric value at `column`, treating absent cells as missing
    pub fn numeric(&self, column: usize) -> Option<f64> {
        self.cell(column).and_then(SampleCell::numeric)
    }
}

/// Ordered rows plus the header names they are keyed by
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSampleTable {
    /// Original headers
    pub headers: Vec<String>,

    pub rows: Vec<SampleRow>,
}

impl RawSampleTable {
    pub fn new(headers: Vec<String>, rows: Vec<SampleRow>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from in-memory string records
    pub fn from_records<H, R, C>(headers: H, records: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                SampleRow::new(index, record.into_iter().map(SampleCell::new).collect())
            })
            .collect();

        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column whose trimmed header equals `name`, ignoring case
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = Self::normalize_header(name);
        self.headers
            .iter()
            .position(|header| Self::normalize_header(header) == wanted)
    }

    /// Names from `required` with no matching column, in request order
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect()
    }

    /// Fail with `MissingColumns` unless every required column is present
    pub fn require_columns(&self, required: &[&str]) -> Result<Vec<usize>> {
        let missing = self.missing_columns(required);
        if !missing.is_empty() {
            return Err(AppError::MissingColumns(missing));
        }

        Ok(required
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect())
    }

    fn normalize_header(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
