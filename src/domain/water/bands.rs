// ============================================================
// PH / TDS BANDS
// ============================================================
// Threshold partitions shared by categorization and the
// treatment decision table

use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the low pH band
pub const PH_LOW_THRESHOLD: f64 = 7.5;

/// Lower bound (inclusive) of the high pH band
pub const PH_HIGH_THRESHOLD: f64 = 8.3;

/// Upper bound (exclusive) of the low TDS band, mg/L
pub const TDS_LOW_THRESHOLD: f64 = 100.0;

/// Lower bound (inclusive) of the high TDS band, mg/L
pub const TDS_HIGH_THRESHOLD: f64 = 300.0;

/// pH band: low `<= 7.5`, target `(7.5, 8.3)`, high `>= 8.3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhBand {
    #[serde(rename = "Low pH")]
    Low,
    #[serde(rename = "In target range")]
    Target,
    #[serde(rename = "High pH")]
    High,
}

impl PhBand {
    pub const ALL: [PhBand; 3] = [PhBand::Low, PhBand::Target, PhBand::High];

    /// Band containing `ph`; `None` only for NaN
    pub fn classify(ph: f64) -> Option<Self> {
        (!ph.is_nan()).then(|| Self::category(ph))
    }

    /// Category of a mean value; NaN falls through to `High`
    pub fn category(ph: f64) -> Self {
        if ph <= PH_LOW_THRESHOLD {
            PhBand::Low
        } else if ph < PH_HIGH_THRESHOLD {
            PhBand::Target
        } else {
            PhBand::High
        }
    }

    /// Category label reported to callers
    pub fn label(&self) -> &'static str {
        match self {
            PhBand::Low => "Low pH",
            PhBand::Target => "In target range",
            PhBand::High => "High pH",
        }
    }
}

impl std::fmt::Display for PhBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// TDS band (mg/L): low `< 100`, moderate `[100, 300)`, high `>= 300`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TdsBand {
    Low,
    Moderate,
    High,
}

impl TdsBand {
    pub const ALL: [TdsBand; 3] = [TdsBand::Low, TdsBand::Moderate, TdsBand::High];

    /// Band containing `tds`; `None` only for NaN
    pub fn classify(tds: f64) -> Option<Self> {
        (!tds.is_nan()).then(|| Self::category(tds))
    }

    /// Category of a mean value; NaN falls through to `High`
    pub fn category(tds: f64) -> Self {
        if tds < TDS_LOW_THRESHOLD {
            TdsBand::Low
        } else if tds < TDS_HIGH_THRESHOLD {
            TdsBand::Moderate
        } else {
            TdsBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TdsBand::Low => "Low",
            TdsBand::Moderate => "Moderate",
            TdsBand::High => "High",
        }
    }
}

impl std::fmt::Display for TdsBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
