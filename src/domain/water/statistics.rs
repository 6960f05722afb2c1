// ============================================================
// STATISTICS RESULT
// ============================================================

use serde::{Deserialize, Serialize};

use super::{PhBand, TdsBand};

/// Aggregate descriptors over the clean sample set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// Arithmetic mean of pH, unrounded
    pub avg_ph: f64,

    pub ph_category: PhBand,

    /// Arithmetic mean of TDS in mg/L, unrounded
    pub avg_tds: f64,

    pub tds_category: TdsBand,

    /// Rows where both pH and TDS were numeric (always >= 1)
    pub row_count: usize,

    pub min_ph: Option<f64>,
    pub max_ph: Option<f64>,
    pub min_tds: Option<f64>,
    pub max_tds: Option<f64>,
}

impl StatisticsResult {
    /// Human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Sample Statistics ({} rows):\n\
             - Avg pH: {:.2} ({})\n\
             - Avg TDS: {:.2} mg/L ({})",
            self.row_count, self.avg_ph, self.ph_category, self.avg_tds, self.tds_category
        )
    }
}
