//! Character-level descriptors.
//!
//! All synthesized quantities are functions of these counts plus noise.

use std::collections::HashSet;

use rand::Rng;
use rand_distr::StandardNormal;

/// Character statistics of one input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharStats {
    pub length: usize,
    pub nitrogen: usize,
    pub oxygen: usize,
    pub sulfur: usize,
    pub aromatic_carbon: usize,
    pub open_parens: usize,
    pub double_bonds: usize,
    pub unique: usize,
}

impl CharStats {
    pub fn of(smiles: &str) -> Self {
        let mut stats = Self {
            length: 0,
            nitrogen: 0,
            oxygen: 0,
            sulfur: 0,
            aromatic_carbon: 0,
            open_parens: 0,
            double_bonds: 0,
            unique: 0,
        };
        let mut seen = HashSet::new();
        for c in smiles.chars() {
            stats.length += 1;
            seen.insert(c);
            match c {
                'N' => stats.nitrogen += 1,
                'O' => stats.oxygen += 1,
                'S' => stats.sulfur += 1,
                'c' => stats.aromatic_carbon += 1,
                '(' => stats.open_parens += 1,
                '=' => stats.double_bonds += 1,
                _ => {}
            }
        }
        stats.unique = seen.len();
        stats
    }

    /// Distinct characters over total length, 0 for the empty string.
    pub fn unique_ratio(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.unique as f64 / self.length as f64
        }
    }
}

/// Weight in daltons, faked from character counts with Gaussian jitter.
pub fn estimate_molecular_weight(stats: &CharStats, rng: &mut impl Rng) -> f64 {
    let weight =
        (stats.length * 12 + stats.nitrogen * 2 + stats.oxygen * 4 + stats.sulfur * 20) as f64;
    let noise: f64 = rng.sample(StandardNormal);
    weight + noise * 20.0
}

/// Structural complexity in [0, 1] from character variety and branching.
pub fn complexity_score(stats: &CharStats) -> f64 {
    let score = stats.unique_ratio()
        + stats.open_parens as f64 * 0.1
        + stats.double_bonds as f64 * 0.05;
    score.min(1.0)
}
