//! Value and confidence synthesis for the five tracked properties.

use rand::Rng;
use rand_distr::{Beta, Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::descriptors::CharStats;
use crate::interpret::{interpretation_for, risk_level_for, RiskLevel};

/// The tracked properties, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Solubility,
    Toxicity,
    Bioavailability,
    DrugLikeness,
    BindingAffinity,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 5] = [
        PropertyKind::Solubility,
        PropertyKind::Toxicity,
        PropertyKind::Bioavailability,
        PropertyKind::DrugLikeness,
        PropertyKind::BindingAffinity,
    ];

    /// Identifier used in payload keys.
    pub fn name(self) -> &'static str {
        match self {
            PropertyKind::Solubility => "solubility",
            PropertyKind::Toxicity => "toxicity",
            PropertyKind::Bioavailability => "bioavailability",
            PropertyKind::DrugLikeness => "drug_likeness",
            PropertyKind::BindingAffinity => "binding_affinity",
        }
    }

    /// Unit label attached to reported values.
    pub fn unit(self) -> &'static str {
        match self {
            PropertyKind::Solubility => "LogS",
            PropertyKind::Toxicity => "Probability",
            PropertyKind::Bioavailability => "%",
            PropertyKind::DrugLikeness => "Score",
            PropertyKind::BindingAffinity => "pIC50",
        }
    }
}

/// One scored property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyPrediction {
    pub value: f64,
    pub confidence: f64,
    pub interpretation: &'static str,
    pub risk_level: RiskLevel,
    pub unit: &'static str,
}

/// All five predictions for one molecule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSet {
    pub solubility: PropertyPrediction,
    pub toxicity: PropertyPrediction,
    pub bioavailability: PropertyPrediction,
    pub drug_likeness: PropertyPrediction,
    pub binding_affinity: PropertyPrediction,
}

impl PredictionSet {
    pub fn get(&self, kind: PropertyKind) -> &PropertyPrediction {
        match kind {
            PropertyKind::Solubility => &self.solubility,
            PropertyKind::Toxicity => &self.toxicity,
            PropertyKind::Bioavailability => &self.bioavailability,
            PropertyKind::DrugLikeness => &self.drug_likeness,
            PropertyKind::BindingAffinity => &self.binding_affinity,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropertyKind, &PropertyPrediction)> {
        PropertyKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }

    /// Exact arithmetic mean of the five confidences.
    pub fn mean_confidence(&self) -> f64 {
        let sum: f64 = self.iter().map(|(_, p)| p.confidence).sum();
        sum / PropertyKind::ALL.len() as f64
    }
}

/// Draw the raw value for one property.
///
/// Solubility combines character statistics with Gaussian noise; the rest
/// are draws from fixed-range distributions.
pub fn synthesize_value(kind: PropertyKind, stats: &CharStats, rng: &mut impl Rng) -> f64 {
    match kind {
        PropertyKind::Solubility => {
            let noise: f64 = rng.sample(StandardNormal);
            -2.5 - stats.length as f64 * 0.05
                + (stats.nitrogen + stats.oxygen) as f64 * 0.2
                - stats.aromatic_carbon as f64 * 0.3
                + noise * 0.5
        }
        PropertyKind::Toxicity => Beta::new(2.0, 6.0).unwrap().sample(rng),
        PropertyKind::Bioavailability => 60.0 + rng.gen::<f64>() * 30.0,
        PropertyKind::DrugLikeness => 0.7 + rng.gen::<f64>() * 0.25,
        PropertyKind::BindingAffinity => 6.5 + rng.gen::<f64>() * 3.0,
    }
}

/// Draw the reported confidence for one property from its band.
pub fn synthesize_confidence(kind: PropertyKind, rng: &mut impl Rng) -> f64 {
    let (base, span) = match kind {
        PropertyKind::Solubility => (0.94, 0.05),
        PropertyKind::Toxicity => (0.91, 0.07),
        PropertyKind::Bioavailability => (0.88, 0.10),
        PropertyKind::DrugLikeness => (0.92, 0.06),
        PropertyKind::BindingAffinity => (0.87, 0.11),
    };
    base + rng.gen::<f64>() * span
}

/// Score one property end to end: value, confidence, sentence, risk.
pub fn predict_property(
    kind: PropertyKind,
    stats: &CharStats,
    rng: &mut impl Rng,
) -> PropertyPrediction {
    let value = synthesize_value(kind, stats, rng);
    let confidence = synthesize_confidence(kind, rng);
    PropertyPrediction {
        value,
        confidence,
        interpretation: interpretation_for(kind, value),
        risk_level: risk_level_for(kind, value, confidence),
        unit: kind.unit(),
    }
}

/// Score all five properties from one generator.
pub fn predict_all(stats: &CharStats, rng: &mut impl Rng) -> PredictionSet {
    PredictionSet {
        solubility: predict_property(PropertyKind::Solubility, stats, rng),
        toxicity: predict_property(PropertyKind::Toxicity, stats, rng),
        bioavailability: predict_property(PropertyKind::Bioavailability, stats, rng),
        drug_likeness: predict_property(PropertyKind::DrugLikeness, stats, rng),
        binding_affinity: predict_property(PropertyKind::BindingAffinity, stats, rng),
    }
}
