// ============================================================
// STATISTICS ENGINE
// ============================================================
// Coerce pH/TDS readings, drop incomplete rows, aggregate and
// categorize

use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::water::{
    PhBand, RawSampleTable, StatisticsResult, TdsBand, PH_COLUMN, REQUIRED_COLUMNS, TDS_COLUMN,
};

/// A row of the clean sample set
#[derive(Debug, Clone, Copy, PartialEq)]
struct CleanSample {
    ph: f64,
    tds: f64,
}

/// Mean and extrema for one property
#[derive(Debug, Clone, Copy)]
struct Aggregate {
    sum: f64,
    /// Incremental mean; stays finite where `sum` overflows
    running_mean: f64,
    min: f64,
    max: f64,
    count: usize,
}

impl Aggregate {
    fn new() -> Self {
        Self {
            sum: 0.0,
            running_mean: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            count: 0,
        }
    }

    fn push(&mut self, value: f64) {
        self.count += 1;
        let n = self.count as f64;

        self.sum += value;
        // Each term is bounded by max(|value|, |mean|) / n, so no overflow
        self.running_mean += value / n - self.running_mean / n;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Plain `sum / count` while the sum is finite; always within `[min, max]`
    fn mean(&self) -> f64 {
        let mean = if self.sum.is_finite() {
            self.sum / self.count as f64
        } else {
            self.running_mean
        };

        mean.clamp(self.min, self.max)
    }
}

/// Compute summary statistics and categories for a sample table
///
/// Fails with `MissingColumns` when the table lacks a pH or TDS column and
/// with `NoValidData` when no row has numeric values for both.
pub fn compute_statistics(table: &RawSampleTable) -> Result<StatisticsResult> {
    let columns = table.require_columns(&REQUIRED_COLUMNS)?;
    let (ph_col, tds_col) = (columns[0], columns[1]);

    let samples = clean_samples(table, ph_col, tds_col);
    debug!(
        "Kept {} of {} rows with numeric {} and {}",
        samples.len(),
        table.row_count(),
        PH_COLUMN,
        TDS_COLUMN
    );

    if samples.is_empty() {
        return Err(AppError::NoValidData);
    }

    let mut ph = Aggregate::new();
    let mut tds = Aggregate::new();
    for sample in &samples {
        ph.push(sample.ph);
        tds.push(sample.tds);
    }

    let avg_ph = ph.mean();
    let avg_tds = tds.mean();

    Ok(StatisticsResult {
        avg_ph,
        ph_category: PhBand::category(avg_ph),
        avg_tds,
        tds_category: TdsBand::category(avg_tds),
        row_count: samples.len(),
        min_ph: Some(ph.min),
        max_ph: Some(ph.max),
        min_tds: Some(tds.min),
        max_tds: Some(tds.max),
    })
}

/// Rows where both readings coerced to numbers; a bad cell drops the whole row
fn clean_samples(table: &RawSampleTable, ph_col: usize, tds_col: usize) -> Vec<CleanSample> {
    table
        .rows
        .iter()
        .filter_map(|row| match (row.numeric(ph_col), row.numeric(tds_col)) {
            (Some(ph), Some(tds)) => Some(CleanSample { ph, tds }),
            _ => None,
        })
        .collect()
}
