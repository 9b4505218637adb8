//! Property profile normalisation.
//!
//! Projects raw property values onto a shared 0-100 axis so they can be
//! compared side by side, then weights each by its reported confidence.

use serde::Serialize;

use crate::properties::{PredictionSet, PropertyKind};

/// Property values rescaled to [0, 100] and weighted by confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyProfile {
    pub solubility: f64,
    pub toxicity: f64,
    pub bioavailability: f64,
    pub drug_likeness: f64,
    pub binding_affinity: f64,
}

/// Rescale one raw value to the shared axis, clamped to [0, 100].
///
/// Source ranges: LogS -8..1, toxicity 0..1 (inverted, lower is better),
/// bioavailability already a percentage, drug-likeness 0..1, pIC50 3..12.
pub fn normalise_value(kind: PropertyKind, value: f64) -> f64 {
    let scaled = match kind {
        PropertyKind::Solubility => (value + 8.0) / 9.0 * 100.0,
        PropertyKind::Toxicity => (1.0 - value) * 100.0,
        PropertyKind::Bioavailability => value,
        PropertyKind::DrugLikeness => value * 100.0,
        PropertyKind::BindingAffinity => (value - 3.0) / 9.0 * 100.0,
    };
    scaled.clamp(0.0, 100.0)
}

/// Build the profile from a prediction set.
pub fn property_profile(predictions: &PredictionSet) -> PropertyProfile {
    let weighted = |kind: PropertyKind| {
        let p = predictions.get(kind);
        normalise_value(kind, p.value) * p.confidence
    };

    PropertyProfile {
        solubility: weighted(PropertyKind::Solubility),
        toxicity: weighted(PropertyKind::Toxicity),
        bioavailability: weighted(PropertyKind::Bioavailability),
        drug_likeness: weighted(PropertyKind::DrugLikeness),
        binding_affinity: weighted(PropertyKind::BindingAffinity),
    }
}
