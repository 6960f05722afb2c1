pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use crate::app::{bootstrap, init_tracing};
pub use crate::application::{compute_statistics, recommend_treatment, WaterAnalysisService};
pub use crate::domain::error::{AppError, Result};
pub use crate::domain::water::{
    AnalysisSummary, PhBand, RawSampleTable, RecommendationResult, StatisticsResult, TdsBand,
    TreatmentRule, WaterAnalysis,
};
pub use crate::infrastructure::config::Settings;
pub use crate::infrastructure::csv::CsvParser;
