// ============================================================
// WATER QUALITY DOMAIN LAYER
// ============================================================
// Core types and value objects for sample analysis
// No I/O, no async

mod analysis;
mod bands;
mod ingest_config;
mod recommendation;
mod sample_table;
mod statistics;

pub use analysis::{AnalysisSummary, WaterAnalysis};
pub use bands::{
    PhBand, TdsBand, PH_HIGH_THRESHOLD, PH_LOW_THRESHOLD, TDS_HIGH_THRESHOLD,
    TDS_LOW_THRESHOLD,
};
pub use ingest_config::IngestConfig;
pub use recommendation::{RecommendationResult, TreatmentRule};
pub use sample_table::{RawSampleTable, SampleCell, SampleRow};
pub use statistics::StatisticsResult;

/// Column names the engines read, in the spelling reported back to callers
pub const PH_COLUMN: &str = "pH";
pub const TDS_COLUMN: &str = "TDS";
pub const REQUIRED_COLUMNS: [&str; 2] = [PH_COLUMN, TDS_COLUMN];
