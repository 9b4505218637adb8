//! Throughput benchmark for the scoring and generation pipelines.
//!
//! Run with: cargo run -p molforge-web --bin benchmark --release

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use molforge_design::{generate, TargetMap};
use molforge_predict::{analyze, synthesize_structure};

const MOLECULES: [&str; 5] = [
    "CCO",
    "CC(=O)Oc1ccccc1C(=O)O",
    "c1ccccc1",
    "CC(C)Cc1ccc(cc1)C(C)C(=O)O",
    "CN1C=NC2=C1C(=O)N(C(=O)N2C)C",
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Starting Benchmark ===");
    let start_total = Instant::now();

    // 1. Scoring throughput
    let rounds = 10_000;
    let start = Instant::now();
    let mut checksum = 0.0;
    for i in 0..rounds {
        let report = analyze(MOLECULES[i % MOLECULES.len()])?;
        checksum += report.overall_confidence;
    }
    let elapsed = start.elapsed();
    println!(
        "Analysis took: {:.2?} ({} reports, {:.0}/s, confidence sum {:.1})",
        elapsed,
        rounds,
        rounds as f64 / elapsed.as_secs_f64(),
        checksum
    );

    // 2. Structure synthesis throughput
    let start = Instant::now();
    let mut atoms = 0;
    for i in 0..rounds {
        let model = synthesize_structure(MOLECULES[i % MOLECULES.len()])?;
        atoms += model.num_atoms;
    }
    let elapsed = start.elapsed();
    println!(
        "Structure synthesis took: {:.2?} ({} models, {} atoms placed)",
        elapsed, rounds, atoms
    );

    // 3. Candidate generation at the cap
    let targets: TargetMap = [
        ("solubility".to_string(), -2.0),
        ("binding_affinity".to_string(), 8.5),
    ]
    .into_iter()
    .collect();
    let mut rng = StdRng::seed_from_u64(42);
    let start = Instant::now();
    let outcome = generate(&targets, 50, 50, &mut rng);
    println!(
        "Generation took: {:.2?} ({} candidates, avg novelty {:.3}, avg validity {:.3})",
        start.elapsed(),
        outcome.count,
        outcome.statistics.average_novelty,
        outcome.statistics.average_validity
    );

    println!("Total benchmark took: {:.2?}", start_total.elapsed());

    Ok(())
}
