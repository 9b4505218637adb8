//! Synthetic 3D structure models.
//!
//! Builds an approximate atom/bond layout from a SMILES string. Heavy atoms
//! come straight from the string, coordinates are sampled in a fixed box and
//! bonds follow the chain order, with a few ring closures when the string
//! suggests cyclic structure.

use rand::Rng;
use serde::Serialize;

use crate::seed::seeded_rng;
use crate::validate::{validate_smiles, ValidationError};

/// One atom in the model, with covalent radius in angstroms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    pub element: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub radius: f64,
}

/// Approximate 3D model for a molecule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureModel {
    pub smiles: String,
    pub atoms: Vec<Atom>,
    /// Index pairs into `atoms`.
    pub bonds: Vec<(usize, usize)>,
    pub num_atoms: usize,
}

/// Covalent radius lookup, 0.8 for anything unrecognised.
fn atomic_radius(element: &str) -> f64 {
    match element {
        "H" => 0.31,
        "C" => 0.76,
        "N" => 0.71,
        "O" => 0.66,
        "F" => 0.57,
        "P" => 1.07,
        "S" => 1.05,
        "Cl" => 1.02,
        "Br" => 1.20,
        "I" => 1.39,
        _ => 0.8,
    }
}

/// Heavy-atom element symbols in string order. Aromatic lowercase atoms are
/// promoted to their uppercase element; two-letter halogens contribute their
/// leading capital only, so `Br` reads as boron-like `B` here. Hydrogens are
/// never modelled.
fn element_symbols(smiles: &str) -> Vec<String> {
    smiles
        .chars()
        .filter_map(|c| {
            if c.is_ascii_uppercase() {
                Some(c.to_string())
            } else if matches!(c, 'c' | 'n' | 'o' | 's') {
                Some(c.to_ascii_uppercase().to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Build a structure model with a stable per-input random stream.
pub fn synthesize_structure(smiles: &str) -> Result<StructureModel, ValidationError> {
    validate_smiles(smiles)?;
    let mut rng = seeded_rng(smiles);
    structure_with_rng(smiles, &mut rng)
}

/// Build a structure model from the caller's random stream.
pub fn structure_with_rng(
    smiles: &str,
    rng: &mut impl Rng,
) -> Result<StructureModel, ValidationError> {
    validate_smiles(smiles)?;

    let atoms: Vec<Atom> = element_symbols(smiles)
        .into_iter()
        .map(|element| {
            let radius = atomic_radius(&element);
            Atom {
                element,
                x: rng.gen_range(-5.0..5.0),
                y: rng.gen_range(-5.0..5.0),
                z: rng.gen_range(-5.0..5.0),
                radius,
            }
        })
        .collect();
    let num_atoms = atoms.len();

    // Backbone chain in string order.
    let mut bonds: Vec<(usize, usize)> = (0..num_atoms.saturating_sub(1))
        .map(|i| (i, i + 1))
        .collect();

    // Ring closures when the string hints at cycles. At most one extra
    // bond per three atoms, so molecules under three atoms get none.
    if smiles.contains('1') || smiles.contains('c') {
        let extra = (num_atoms / 3).min(3);
        for _ in 0..extra {
            let a = rng.gen_range(0..num_atoms);
            let b = (a + rng.gen_range(1..num_atoms)) % num_atoms;
            let bond = (a.min(b), a.max(b));
            if !bonds.contains(&bond) {
                bonds.push(bond);
            }
        }
    }

    Ok(StructureModel {
        smiles: smiles.to_string(),
        atoms,
        bonds,
        num_atoms,
    })
}
