pub mod recommendation_engine;
pub mod statistics_engine;
pub mod water_analysis;
