// ============================================================
// WATER ANALYSIS USE CASE
// ============================================================
// Orchestrate ingestion, statistics and treatment selection

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};
use validator::Validate;

use super::recommendation_engine::recommend_treatment;
use super::statistics_engine::compute_statistics;
use crate::domain::error::{AppError, Result};
use crate::domain::water::{IngestConfig, RawSampleTable, WaterAnalysis, REQUIRED_COLUMNS};
use crate::infrastructure::csv::CsvParser;

/// Water analysis use case
pub struct WaterAnalysisService {
    parser: CsvParser,
}

impl WaterAnalysisService {
    /// Create a new analysis service
    pub fn new(config: IngestConfig) -> Self {
        Self {
            parser: CsvParser::with_config(config),
        }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(IngestConfig::default())
    }

    /// Analyze an uploaded CSV payload
    pub fn analyze_csv(
        &self,
        filename: &str,
        site_name: Option<String>,
        bytes: &[u8],
    ) -> Result<WaterAnalysis> {
        let start = Instant::now();

        self.parser.config().validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid ingest config: {}", e))
        })?;

        let table = CsvParser::validate_filename(filename)
            .and_then(|_| self.parser.parse_bytes(bytes))
            .and_then(|table| table.require_columns(&REQUIRED_COLUMNS).map(|_| table))
            .map_err(|e| {
                warn!("Rejected upload '{}': {}", filename, e);
                e
            })?;

        let analysis = self.analyze_table(filename, site_name, &table)?;

        info!(
            "Analyzed '{}' ({} of {} rows) -> {} in {}ms",
            filename,
            analysis.row_count,
            table.row_count(),
            analysis.treatment_train,
            start.elapsed().as_millis()
        );

        Ok(analysis)
    }

    /// Analyze a CSV file from disk
    pub async fn analyze_file(&self, path: &Path, site_name: Option<String>) -> Result<WaterAnalysis> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                AppError::ValidationError(format!("Invalid file path: {}", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.analyze_csv(&filename, site_name, &bytes)
    }

    /// Analyze an already ingested table
    pub fn analyze_table(
        &self,
        filename: &str,
        site_name: Option<String>,
        table: &RawSampleTable,
    ) -> Result<WaterAnalysis> {
        let stats = compute_statistics(table)?;
        let recommendation = recommend_treatment(stats.avg_ph, stats.avg_tds);

        let analysis = WaterAnalysis::new(filename, site_name, &stats, &recommendation);
        analysis.validate()?;

        Ok(analysis)
    }

    /// Statistics summary report without building a record
    pub fn analysis_report(&self, bytes: &[u8]) -> Result<String> {
        let table = self.parser.parse_bytes(bytes)?;
        let stats = compute_statistics(&table)?;
        let recommendation = recommend_treatment(stats.avg_ph, stats.avg_tds);

        Ok(format!(
            "{}\n\nRecommended treatment: {}\n{}",
            stats.summary(),
            recommendation.treatment_train,
            recommendation.explanation
        ))
    }
}

impl Default for WaterAnalysisService {
    fn default() -> Self {
        Self::default_config()
    }
}
