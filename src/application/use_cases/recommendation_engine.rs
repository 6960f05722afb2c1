// ============================================================
// RECOMMENDATION ENGINE
// ============================================================
// Map mean pH/TDS onto the treatment decision table

use crate::domain::water::{PhBand, RecommendationResult, TdsBand, TreatmentRule};

/// Decision table in evaluation order; the first matching row wins
pub const DECISION_TABLE: [(PhBand, TdsBand, TreatmentRule); 9] = [
    (PhBand::Target, TdsBand::Low, TreatmentRule::NoTreatment),
    (PhBand::High, TdsBand::Low, TreatmentRule::AcidDosing),
    (PhBand::Low, TdsBand::Low, TreatmentRule::CausticDosing),
    (PhBand::Target, TdsBand::Moderate, TreatmentRule::ReverseOsmosis),
    (PhBand::Target, TdsBand::High, TreatmentRule::IonExchange),
    (PhBand::High, TdsBand::Moderate, TreatmentRule::AcidDosingThenReverseOsmosis),
    (PhBand::Low, TdsBand::Moderate, TreatmentRule::CausticDosingThenReverseOsmosis),
    (PhBand::High, TdsBand::High, TreatmentRule::AcidDosingThenIonExchange),
    (PhBand::Low, TdsBand::High, TreatmentRule::CausticDosingThenIonExchange),
];

/// Rule for a pair of bands, `Specialist` when no table row matches
pub fn select_rule(ph: Option<PhBand>, tds: Option<TdsBand>) -> TreatmentRule {
    DECISION_TABLE
        .iter()
        .find(|(p, t, _)| Some(*p) == ph && Some(*t) == tds)
        .map(|(_, _, rule)| *rule)
        .unwrap_or(TreatmentRule::Specialist)
}

/// Recommend a treatment train for the given means; never fails
pub fn recommend_treatment(avg_ph: f64, avg_tds: f64) -> RecommendationResult {
    let rule = select_rule(PhBand::classify(avg_ph), TdsBand::classify(avg_tds));
    RecommendationResult::from(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::water::{
        PH_HIGH_THRESHOLD, PH_LOW_THRESHOLD, TDS_HIGH_THRESHOLD, TDS_LOW_THRESHOLD,
    };
    use std::collections::HashSet;

    /// A representative value inside each band
    fn ph_value(band: PhBand) -> f64 {
        match band {
            PhBand::Low => 7.0,
            PhBand::Target => 8.0,
            PhBand::High => 8.5,
        }
    }

    fn tds_value(band: TdsBand) -> f64 {
        match band {
            TdsBand::Low => 50.0,
            TdsBand::Moderate => 200.0,
            TdsBand::High => 400.0,
        }
    }

    #[test]
    fn test_clean_water_no_treatment() {
        let result = recommend_treatment(8.0, 50.0);
        assert_eq!(result.treatment_train, "No treatment required");
        assert!(result.explanation.to_lowercase().contains("clean"));
    }

    #[test]
    fn test_high_ph_low_tds() {
        let result = recommend_treatment(8.5, 80.0);
        assert!(result.treatment_train.contains("H₂SO₄"));
        assert!(result.explanation.to_lowercase().contains("acid"));
    }

    #[test]
    fn test_low_ph_low_tds() {
        let result = recommend_treatment(7.0, 80.0);
        assert!(result.treatment_train.contains("NaOH"));
        assert!(result.explanation.to_lowercase().contains("caustic"));
    }

    #[test]
    fn test_target_ph_moderate_tds() {
        let result = recommend_treatment(7.8, 250.0);
        assert_eq!(result.treatment_train, "Reverse osmosis (RO)");
        assert!(result.explanation.contains("dissolved solids"));
    }

    #[test]
    fn test_target_ph_high_tds() {
        let result = recommend_treatment(7.8, 500.0);
        assert_eq!(result.treatment_train, "Ion exchange");
        assert!(result.explanation.to_lowercase().contains("dissolved ions"));
    }

    #[test]
    fn test_sequential_trains_adjust_ph_first() {
        let cases = [
            (8.5, 200.0, "H₂SO₄", "RO"),
            (7.0, 200.0, "NaOH", "RO"),
            (8.5, 400.0, "H₂SO₄", "Ion exchange"),
            (7.0, 400.0, "NaOH", "Ion exchange"),
        ];

        for (ph, tds, first, second) in cases {
            let train = recommend_treatment(ph, tds).treatment_train;
            let steps: Vec<&str> = train.split(" → ").collect();
            assert_eq!(steps.len(), 2, "train: {}", train);
            assert!(steps[0].contains(first), "train: {}", train);
            assert!(steps[1].contains(second), "train: {}", train);
        }
    }

    #[test]
    fn test_boundary_sample_recommends_caustic_then_ro() {
        let result = recommend_treatment(7.5, 150.0);
        assert_eq!(result.rule, TreatmentRule::CausticDosingThenReverseOsmosis);
        assert_eq!(
            result.treatment_train,
            "pH adjustment with NaOH → Reverse osmosis (RO)"
        );
    }

    #[test]
    fn test_boundary_points() {
        assert_eq!(
            recommend_treatment(PH_LOW_THRESHOLD, 50.0).rule,
            TreatmentRule::CausticDosing
        );
        assert_eq!(
            recommend_treatment(PH_HIGH_THRESHOLD, 50.0).rule,
            TreatmentRule::AcidDosing
        );
        assert_eq!(
            recommend_treatment(8.0, TDS_LOW_THRESHOLD).rule,
            TreatmentRule::ReverseOsmosis
        );
        assert_eq!(
            recommend_treatment(8.0, TDS_HIGH_THRESHOLD).rule,
            TreatmentRule::IonExchange
        );
    }

    #[test]
    fn test_table_covers_every_band_pair_once() {
        let mut rules = HashSet::new();
        for ph in PhBand::ALL {
            for tds in TdsBand::ALL {
                let matches = DECISION_TABLE
                    .iter()
                    .filter(|(p, t, _)| *p == ph && *t == tds)
                    .count();
                assert_eq!(matches, 1, "{:?}/{:?}", ph, tds);

                let rule = select_rule(Some(ph), Some(tds));
                assert_ne!(rule, TreatmentRule::Specialist);
                rules.insert(rule);
            }
        }
        assert_eq!(rules.len(), 9);
    }

    #[test]
    fn test_band_thresholds_match_categorization() {
        for ph in PhBand::ALL {
            for tds in TdsBand::ALL {
                let (p, t) = (ph_value(ph), tds_value(tds));
                assert_eq!(PhBand::classify(p), Some(ph));
                assert_eq!(TdsBand::classify(t), Some(tds));
                assert_eq!(recommend_treatment(p, t).rule, select_rule(Some(ph), Some(tds)));
            }
        }
    }

    #[test]
    fn test_total_over_grid() {
        let mut ph = -2.0;
        while ph <= 16.0 {
            let mut tds = -50.0;
            while tds <= 2000.0 {
                let result = recommend_treatment(ph, tds);
                assert_ne!(result.rule, TreatmentRule::Specialist, "{} {}", ph, tds);
                assert_eq!(result, recommend_treatment(ph, tds));
                tds += 12.5;
            }
            ph += 0.05;
        }
    }

    #[test]
    fn test_extreme_values_are_modeled() {
        assert_eq!(
            recommend_treatment(f64::INFINITY, f64::INFINITY).rule,
            TreatmentRule::AcidDosingThenIonExchange
        );
        assert_eq!(
            recommend_treatment(f64::NEG_INFINITY, f64::MIN).rule,
            TreatmentRule::CausticDosing
        );
    }

    #[test]
    fn test_fallback_for_unmodeled_values() {
        let result = recommend_treatment(f64::NAN, 50.0);
        assert_eq!(result.rule, TreatmentRule::Specialist);
        assert_eq!(result.treatment_train, "Contact water treatment specialist");
        assert!(result.explanation.contains("outside typical ranges"));

        assert_eq!(select_rule(Some(PhBand::Target), None), TreatmentRule::Specialist);
    }
}
