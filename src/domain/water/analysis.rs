// ============================================================
// WATER ANALYSIS RECORD
// ============================================================
// Combined statistics + recommendation handed to the caller
// for persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{PhBand, RecommendationResult, StatisticsResult, TdsBand};

/// One analysed upload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WaterAnalysis {
    pub id: Uuid,

    pub upload_timestamp: DateTime<Utc>,

    #[validate(length(min = 1, max = 255))]
    pub original_filename: String,

    #[validate(length(max = 255))]
    pub site_name: Option<String>,

    pub avg_ph: f64,
    pub ph_category: PhBand,
    pub avg_tds: f64,
    pub tds_category: TdsBand,

    #[validate(length(min = 1, max = 500))]
    pub treatment_train: String,

    #[validate(length(min = 1, max = 2000))]
    pub explanation: String,

    /// Notes about the methods actually applied on site
    #[validate(length(max = 2000))]
    pub user_notes: Option<String>,

    #[validate(range(min = 1))]
    pub row_count: usize,

    pub min_ph: Option<f64>,
    pub max_ph: Option<f64>,
    pub min_tds: Option<f64>,
    pub max_tds: Option<f64>,

    pub created_at: DateTime<Utc>,
}

impl WaterAnalysis {
    /// Assemble a record from engine outputs, stamped with the current time
    pub fn new(
        original_filename: impl Into<String>,
        site_name: Option<String>,
        stats: &StatisticsResult,
        recommendation: &RecommendationResult,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            upload_timestamp: now,
            original_filename: original_filename.into(),
            site_name,
            avg_ph: stats.avg_ph,
            ph_category: stats.ph_category,
            avg_tds: stats.avg_tds,
            tds_category: stats.tds_category,
            treatment_train: recommendation.treatment_train.clone(),
            explanation: recommendation.explanation.clone(),
            user_notes: None,
            row_count: stats.row_count,
            min_ph: stats.min_ph,
            max_ph: stats.max_ph,
            min_tds: stats.min_tds,
            max_tds: stats.max_tds,
            created_at: now,
        }
    }

    pub fn with_user_notes(mut self, notes: impl Into<String>) -> Self {
        self.user_notes = Some(notes.into());
        self
    }

    /// Display summary with means rounded to two decimals
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            avg_ph: round2(self.avg_ph),
            ph_category: self.ph_category,
            avg_tds: round2(self.avg_tds),
            tds_category: self.tds_category,
            row_count: self.row_count,
        }
    }

    pub fn recommendation(&self) -> (&str, &str) {
        (&self.treatment_train, &self.explanation)
    }
}

/// Presentation view of the statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub avg_ph: f64,
    pub ph_category: PhBand,
    pub avg_tds: f64,
    pub tds_category: TdsBand,
    pub row_count: usize,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::water::TreatmentRule;

    fn stats() -> StatisticsResult {
        StatisticsResult {
            avg_ph: 7.456789,
            ph_category: PhBand::Low,
            avg_tds: 150.12345,
            tds_category: TdsBand::Moderate,
            row_count: 3,
            min_ph: Some(7.4),
            max_ph: Some(7.6),
            min_tds: Some(145.0),
            max_tds: Some(155.0),
        }
    }

    fn record() -> WaterAnalysis {
        let rec = RecommendationResult::from(TreatmentRule::CausticDosingThenReverseOsmosis);
        WaterAnalysis::new("samples.csv", Some("Site A".to_string()), &stats(), &rec)
    }

    #[test]
    fn test_summary_rounds_for_display() {
        let analysis = record();
        let summary = analysis.summary();

        assert_eq!(summary.avg_ph, 7.46);
        assert_eq!(summary.avg_tds, 150.12);
        assert_eq!(analysis.avg_ph, 7.456789);
    }

    #[test]
    fn test_valid_record_passes_validation() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_long_site_name_fails_validation() {
        let mut analysis = record();
        analysis.site_name = Some("x".repeat(256));
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_long_user_notes_fail_validation() {
        let analysis = record().with_user_notes("n".repeat(2001));
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_zero_row_count_fails_validation() {
        let mut analysis = record();
        analysis.row_count = 0;
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_serializes_category_labels() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["ph_category"], "Low pH");
        assert_eq!(json["tds_category"], "Moderate");
        assert_eq!(json["site_name"], "Site A");
    }
}
