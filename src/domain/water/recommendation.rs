// ============================================================
// TREATMENT RECOMMENDATION TYPES
// ============================================================
// Rule identifiers and the wording callers may match against

use serde::{Deserialize, Serialize};

/// Separator between steps of a multi-step treatment train
pub const STEP_SEPARATOR: &str = " → ";

/// Decision table rows, plus the fallback for inputs no row models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentRule {
    /// Target pH, low TDS
    NoTreatment,
    /// High pH, low TDS
    AcidDosing,
    /// Low pH, low TDS
    CausticDosing,
    /// Target pH, moderate TDS
    ReverseOsmosis,
    /// Target pH, high TDS
    IonExchange,
    /// High pH, moderate TDS
    AcidDosingThenReverseOsmosis,
    /// Low pH, moderate TDS
    CausticDosingThenReverseOsmosis,
    /// High pH, high TDS
    AcidDosingThenIonExchange,
    /// Low pH, high TDS
    CausticDosingThenIonExchange,
    /// Values outside every modeled band
    Specialist,
}

impl TreatmentRule {
    /// Ordered treatment steps
    pub fn steps(&self) -> &'static [&'static str] {
        const ACID: &str = "pH adjustment with sulfuric acid (H₂SO₄)";
        const CAUSTIC: &str = "pH adjustment with sodium hydroxide (NaOH)";
        const ACID_SHORT: &str = "pH adjustment with H₂SO₄";
        const CAUSTIC_SHORT: &str = "pH adjustment with NaOH";
        const RO: &str = "Reverse osmosis (RO)";
        const IX: &str = "Ion exchange";

        match self {
            TreatmentRule::NoTreatment => &["No treatment required"],
            TreatmentRule::AcidDosing => &[ACID],
            TreatmentRule::CausticDosing => &[CAUSTIC],
            TreatmentRule::ReverseOsmosis => &[RO],
            TreatmentRule::IonExchange => &[IX],
            TreatmentRule::AcidDosingThenReverseOsmosis => &[ACID_SHORT, RO],
            TreatmentRule::CausticDosingThenReverseOsmosis => &[CAUSTIC_SHORT, RO],
            TreatmentRule::AcidDosingThenIonExchange => &[ACID_SHORT, IX],
            TreatmentRule::CausticDosingThenIonExchange => &[CAUSTIC_SHORT, IX],
            TreatmentRule::Specialist => &["Contact water treatment specialist"],
        }
    }

    /// Arrow-joined treatment train
    pub fn treatment_train(&self) -> String {
        self.steps().join(STEP_SEPARATOR)
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            TreatmentRule::NoTreatment => {
                "Water is within the target pH range and has low TDS, so it is considered clean and unlikely to cause corrosion."
            }
            TreatmentRule::AcidDosing => {
                "pH is above the target range; acid dosing is recommended to bring pH into the safe operating range."
            }
            TreatmentRule::CausticDosing => {
                "pH is below the target range; caustic dosing is recommended to bring pH into the safe operating range."
            }
            TreatmentRule::ReverseOsmosis => {
                "TDS is elevated; RO is recommended to reduce dissolved solids while pH is already in range."
            }
            TreatmentRule::IonExchange => {
                "TDS is high; ion exchange is recommended to remove dissolved ions effectively while pH is in range."
            }
            TreatmentRule::AcidDosingThenReverseOsmosis => {
                "pH is above target range and TDS is elevated. First adjust pH with acid dosing, then use RO to reduce dissolved solids."
            }
            TreatmentRule::CausticDosingThenReverseOsmosis => {
                "pH is below target range and TDS is elevated. First adjust pH with caustic dosing, then use RO to reduce dissolved solids."
            }
            TreatmentRule::AcidDosingThenIonExchange => {
                "pH is above target range and TDS is high. First adjust pH with acid dosing, then use ion exchange to remove dissolved ions."
            }
            TreatmentRule::CausticDosingThenIonExchange => {
                "pH is below target range and TDS is high. First adjust pH with caustic dosing, then use ion exchange to remove dissolved ions."
            }
            TreatmentRule::Specialist => {
                "Water parameters are outside typical ranges. Professional consultation recommended."
            }
        }
    }
}

/// Treatment train plus its rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub treatment_train: String,
    pub explanation: String,

    /// Rule that produced this recommendation
    pub rule: TreatmentRule,
}

impl From<TreatmentRule> for RecommendationResult {
    fn from(rule: TreatmentRule) -> Self {
        Self {
            treatment_train: rule.treatment_train(),
            explanation: rule.explanation().to_string(),
            rule,
        }
    }
}
