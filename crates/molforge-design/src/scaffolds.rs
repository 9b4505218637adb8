//! Scaffold library.
//!
//! Ring systems common in approved small-molecule drugs. Every candidate
//! starts from one of these before decoration.

use rand::Rng;

pub const SCAFFOLDS: [&str; 10] = [
    "c1ccccc1",           // benzene
    "c1ccncc1",           // pyridine
    "c1ccc2c(c1)ccnc2",   // quinoline
    "c1ccc2c(c1)[nH]cn2", // benzimidazole
    "c1ccc2c(c1)cccc2",   // naphthalene
    "c1cc(ccc1)",         // substituted benzene
    "c1c[nH]cn1",         // imidazole
    "c1ccoc1",            // furan
    "c1ccsc1",            // thiophene
    "c1cncnc1",           // pyrimidine
];

/// Pick one scaffold uniformly at random.
pub fn pick_scaffold(rng: &mut impl Rng) -> &'static str {
    SCAFFOLDS[rng.gen_range(0..SCAFFOLDS.len())]
}
