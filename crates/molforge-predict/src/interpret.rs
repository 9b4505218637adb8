//! Interpretation sentences and development-risk ladders.
//!
//! The threshold tables here are the entire policy of the scorer: each
//! property gets an ordered ladder for its canned interpretation and a
//! second, independently thresholded ladder for its risk level. First
//! match wins.

use serde::{Deserialize, Serialize};

use crate::properties::PropertyKind;

/// Development risk attached to a single property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Uncertain,
}

/// Confidence floor below which risk is reported as [`RiskLevel::Uncertain`]
/// regardless of the value.
pub const UNCERTAIN_CONFIDENCE_FLOOR: f64 = 0.8;

/// Canned sentence for a property value.
pub fn interpretation_for(kind: PropertyKind, value: f64) -> &'static str {
    match kind {
        PropertyKind::Solubility => {
            if value > -1.0 {
                "Highly soluble - Excellent aqueous solubility for oral formulation"
            } else if value > -3.0 {
                "Good solubility - Adequate for most pharmaceutical formulations"
            } else if value > -5.0 {
                "Moderate solubility - May require formulation optimization"
            } else {
                "Poor solubility - Significant formulation challenges expected"
            }
        }
        PropertyKind::Toxicity => {
            if value < 0.3 {
                "Low toxicity risk - Favorable safety profile for development"
            } else if value < 0.7 {
                "Moderate toxicity - Requires comprehensive safety evaluation"
            } else {
                "High toxicity risk - Significant safety concerns identified"
            }
        }
        PropertyKind::Bioavailability => {
            if value > 70.0 {
                "Excellent bioavailability - High systemic exposure expected"
            } else if value > 50.0 {
                "Good bioavailability - Adequate absorption predicted"
            } else if value > 30.0 {
                "Moderate bioavailability - May require dose optimization"
            } else {
                "Poor bioavailability - Significant absorption limitations"
            }
        }
        PropertyKind::DrugLikeness => {
            if value > 0.8 {
                "Excellent drug-likeness - Highly suitable for pharmaceutical development"
            } else if value > 0.6 {
                "Good drug-likeness - Suitable for lead optimization"
            } else if value > 0.4 {
                "Moderate drug-likeness - Requires structural modifications"
            } else {
                "Poor drug-likeness - Major structural changes needed"
            }
        }
        PropertyKind::BindingAffinity => {
            if value > 8.0 {
                "Very strong binding - Excellent target engagement"
            } else if value > 6.0 {
                "Strong binding - Good target affinity predicted"
            } else if value > 4.0 {
                "Moderate binding - Acceptable target interaction"
            } else {
                "Weak binding - Poor target affinity"
            }
        }
    }
}

/// Risk classification for a property value at a given confidence.
pub fn risk_level_for(kind: PropertyKind, value: f64, confidence: f64) -> RiskLevel {
    if confidence < UNCERTAIN_CONFIDENCE_FLOOR {
        return RiskLevel::Uncertain;
    }

    match kind {
        PropertyKind::Solubility => {
            if value > -4.0 {
                RiskLevel::Low
            } else if value > -6.0 {
                RiskLevel::Medium
            } else {
                RiskLevel::High
            }
        }
        PropertyKind::Toxicity => {
            if value < 0.4 {
                RiskLevel::Low
            } else if value < 0.7 {
                RiskLevel::Medium
            } else {
                RiskLevel::High
            }
        }
        PropertyKind::Bioavailability => {
            if value > 60.0 {
                RiskLevel::Low
            } else if value > 40.0 {
                RiskLevel::Medium
            } else {
                RiskLevel::High
            }
        }
        PropertyKind::DrugLikeness => {
            if value > 0.6 {
                RiskLevel::Low
            } else if value > 0.4 {
                RiskLevel::Medium
            } else {
                RiskLevel::High
            }
        }
        PropertyKind::BindingAffinity => {
            if value > 6.0 {
                RiskLevel::Low
            } else if value > 4.0 {
                RiskLevel::Medium
            } else {
                RiskLevel::High
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solubility_buckets() {
        assert!(interpretation_for(PropertyKind::Solubility, 0.0).starts_with("Highly soluble"));
        assert!(interpretation_for(PropertyKind::Solubility, -2.0).starts_with("Good solubility"));
        assert!(
            interpretation_for(PropertyKind::Solubility, -4.0).starts_with("Moderate solubility")
        );
        assert!(interpretation_for(PropertyKind::Solubility, -6.0).starts_with("Poor solubility"));
    }

    #[test]
    fn test_toxicity_has_three_buckets() {
        assert!(interpretation_for(PropertyKind::Toxicity, 0.1).starts_with("Low toxicity"));
        assert!(interpretation_for(PropertyKind::Toxicity, 0.5).starts_with("Moderate toxicity"));
        assert!(interpretation_for(PropertyKind::Toxicity, 0.9).starts_with("High toxicity"));
    }

    #[test]
    fn test_binding_boundaries_are_exclusive() {
        // Exactly 8.0 falls into the second bucket, not the first
        assert!(interpretation_for(PropertyKind::BindingAffinity, 8.0).starts_with("Strong"));
        assert!(
            interpretation_for(PropertyKind::BindingAffinity, 8.01).starts_with("Very strong")
        );
    }

    #[test]
    fn test_low_confidence_overrides_risk() {
        for kind in PropertyKind::ALL {
            assert_eq!(risk_level_for(kind, 0.0, 0.79), RiskLevel::Uncertain);
        }
        // At the floor itself the value ladder applies again
        assert_eq!(
            risk_level_for(PropertyKind::Solubility, 0.0, 0.8),
            RiskLevel::Low
        );
    }

    #[test]
    fn test_risk_ladders() {
        assert_eq!(
            risk_level_for(PropertyKind::Solubility, -3.0, 0.95),
            RiskLevel::Low
        );
        assert_eq!(
            risk_level_for(PropertyKind::Solubility, -5.0, 0.95),
            RiskLevel::Medium
        );
        assert_eq!(
            risk_level_for(PropertyKind::Solubility, -7.0, 0.95),
            RiskLevel::High
        );
        assert_eq!(
            risk_level_for(PropertyKind::Toxicity, 0.85, 0.95),
            RiskLevel::High
        );
        assert_eq!(
            risk_level_for(PropertyKind::Bioavailability, 85.0, 0.95),
            RiskLevel::Low
        );
        assert_eq!(
            risk_level_for(PropertyKind::DrugLikeness, 0.5, 0.95),
            RiskLevel::Medium
        );
        assert_eq!(
            risk_level_for(PropertyKind::BindingAffinity, 3.0, 0.95),
            RiskLevel::High
        );
    }

    #[test]
    fn test_risk_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Uncertain).unwrap(),
            "\"UNCERTAIN\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"LOW\"");
    }
}
