//! Test the scoring pipeline end to end.
//!
//! Run with:
//! ```bash
//! cargo test --package molforge-predict --test test_scoring
//! ```

use molforge_predict::{
    analyze, property_profile, synthesize_structure, PropertyKind, ValidationError, MODEL_VERSION,
};

#[test]
fn test_full_report_for_a_simple_molecule() {
    let report = analyze("CCO").expect("ethanol should score");

    assert_eq!(report.smiles, "CCO");
    assert_eq!(report.model_version, MODEL_VERSION);
    assert!((0.0..=1.0).contains(&report.overall_confidence));
    assert!(report.molecular_weight > 0.0);
    assert!((0.0..=1.0).contains(&report.complexity_score));

    for kind in PropertyKind::ALL {
        let p = report.predictions.get(kind);
        assert!(!p.interpretation.is_empty());
        assert!(!p.unit.is_empty());
        assert!((0.0..=1.0).contains(&p.confidence), "{kind:?}: {}", p.confidence);
    }
}

#[test]
fn test_repeat_calls_agree_everywhere() {
    let first = analyze("CC(=O)Oc1ccccc1C(=O)O").unwrap();
    let second = analyze("CC(=O)Oc1ccccc1C(=O)O").unwrap();

    assert_eq!(first.predictions, second.predictions);
    assert_eq!(first.overall_confidence, second.overall_confidence);
    assert_eq!(first.molecular_weight, second.molecular_weight);

    let structure_a = synthesize_structure("CC(=O)Oc1ccccc1C(=O)O").unwrap();
    let structure_b = synthesize_structure("CC(=O)Oc1ccccc1C(=O)O").unwrap();
    assert_eq!(structure_a, structure_b);
}

#[test]
fn test_rejections_across_the_surface() {
    for (smiles, expected) in [
        ("", ValidationError::Empty),
        ("A", ValidationError::TooShort),
        ("12", ValidationError::NoAtoms),
        ("AB(", ValidationError::UnbalancedParentheses),
    ] {
        assert_eq!(analyze(smiles).unwrap_err(), expected, "analyze({smiles:?})");
        assert_eq!(
            synthesize_structure(smiles).unwrap_err(),
            expected,
            "structure({smiles:?})"
        );
    }
}

#[test]
fn test_profile_reflects_the_report() {
    let report = analyze("c1ccncc1").unwrap();
    let profile = property_profile(&report.predictions);

    let bio = report.predictions.get(PropertyKind::Bioavailability);
    assert_eq!(profile.bioavailability, bio.value.clamp(0.0, 100.0) * bio.confidence);
}

#[test]
fn test_report_serializes_with_the_wire_field_names() {
    let report = analyze("CCO").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    for field in [
        "smiles",
        "predictions",
        "overall_confidence",
        "processing_time",
        "model_version",
        "timestamp",
        "molecular_weight",
        "complexity_score",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }

    let solubility = &json["predictions"]["solubility"];
    assert_eq!(solubility["unit"], "LogS");
    assert!(matches!(
        solubility["risk_level"].as_str(),
        Some("LOW" | "MEDIUM" | "HIGH" | "UNCERTAIN")
    ));
}
