pub mod use_cases;

pub use use_cases::recommendation_engine::{recommend_treatment, select_rule, DECISION_TABLE};
pub use use_cases::statistics_engine::compute_statistics;
pub use use_cases::water_analysis::WaterAnalysisService;
