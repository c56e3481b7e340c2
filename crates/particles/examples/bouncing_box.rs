//! Bouncing box example
//!
//! Spawns a population of disks in a closed box, runs a few seconds of
//! simulation and prints the conserved quantities as it goes.
//!
//! Run with: cargo run --package particles --example bouncing_box
//! Set RUST_LOG=particles=debug to see spawn diagnostics.

use particles::Simulation;
use particles::config::{SimulationConfig, SpawnConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Elastic Bodies in a Box\n");
    println!("{}", "=".repeat(60));

    let config = SimulationConfig {
        width: 40_000.0,
        height: 25_000.0,
        seed: 2026,
        spawn: SpawnConfig {
            mass_range: (1.0, 100.0),
            max_speed: 400.0,
            ..SpawnConfig::default()
        },
        ..SimulationConfig::default()
    };

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    match sim.set_body_count(300) {
        Ok(report) => println!(
            "\nPlaced {} bodies using {} placement attempts",
            report.added, report.attempts
        ),
        Err(e) => {
            eprintln!("Could not place bodies: {e}");
            std::process::exit(1);
        }
    }

    let dt = 1.0 / 120.0;
    let ticks_per_report = 120;
    let e0 = sim.total_kinetic_energy();

    println!(
        "\n{:>8} {:>10} {:>10} {:>16} {:>12}",
        "time (s)", "walls", "pairs", "kinetic energy", "ΔE/E"
    );

    for _ in 0..10 {
        let mut walls = 0;
        let mut pairs = 0;
        for _ in 0..ticks_per_report {
            let report = sim.step(dt);
            walls += report.wall_reflections;
            pairs += report.pair_collisions;
        }

        let e = sim.total_kinetic_energy();
        println!(
            "{:>8.2} {:>10} {:>10} {:>16.4e} {:>12.2e}",
            sim.time(),
            walls,
            pairs,
            e,
            (e - e0) / e0
        );
    }

    // Shrinking never fails
    if let Ok(report) = sim.set_body_count(100) {
        println!("\nRemoved {} bodies, {} remain", report.removed, sim.body_count());
    }
}
