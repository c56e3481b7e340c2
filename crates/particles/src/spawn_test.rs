use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::Body;
use crate::boundary::Boundary;
use crate::config::SpawnConfig;
use crate::error::ParticleError;
use crate::size::SizeModel;
use crate::spawn::*;

fn spawn(
    bodies: &mut Vec<Body>,
    boundary: &Boundary,
    desired: usize,
    config: &SpawnConfig,
    rng: &mut ChaChaRng,
) -> Result<SpawnReport, ParticleError> {
    spawn_to(bodies, boundary, desired, config, &SizeModel::default(), rng)
}

fn assert_no_overlaps(bodies: &[Body]) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let reach = bodies[i].radius() + bodies[j].radius();
            assert!(
                bodies[i].distance_to(&bodies[j]) >= reach,
                "bodies {i} and {j} overlap"
            );
        }
    }
}

fn assert_inside(bodies: &[Body], boundary: &Boundary) {
    for b in bodies {
        assert!(b.position.x >= 0.0 && b.position.x <= boundary.width - b.diameter());
        assert!(b.position.y >= 0.0 && b.position.y <= boundary.height - b.diameter());
    }
}

#[test]
fn test_sample_velocity_respects_max_speed() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    for _ in 0..1000 {
        assert!(sample_velocity(&mut rng, 150.0).magnitude() <= 150.0 + 1e-9);
    }
}

#[test]
fn test_sample_velocity_zero_max_speed() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    assert_eq!(sample_velocity(&mut rng, 0.0).magnitude(), 0.0);
}

#[test]
fn test_sample_body_mass_in_range() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let config = SpawnConfig {
        mass_range: (10.0, 20.0),
        ..SpawnConfig::default()
    };

    for _ in 0..500 {
        let b = sample_body(&mut rng, &config, &SizeModel::default()).unwrap();
        assert!((10.0..=20.0).contains(&b.mass()));
    }
}

#[test]
fn test_spawn_grows_without_overlap() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let boundary = Boundary::new(50_000.0, 50_000.0);
    let mut bodies = Vec::new();

    let report = spawn(&mut bodies, &boundary, 200, &SpawnConfig::default(), &mut rng).unwrap();

    assert_eq!(bodies.len(), 200);
    assert_eq!(report.added, 200);
    assert_eq!(report.removed, 0);
    assert!(report.attempts >= 200 && report.attempts <= 600);
    assert_no_overlaps(&bodies);
    assert_inside(&bodies, &boundary);
}

#[test]
fn test_spawn_incremental_growth_avoids_existing_bodies() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let boundary = Boundary::new(30_000.0, 30_000.0);
    let config = SpawnConfig::default();
    let mut bodies = Vec::new();

    spawn(&mut bodies, &boundary, 50, &config, &mut rng).unwrap();
    let first_batch = bodies.clone();
    spawn(&mut bodies, &boundary, 120, &config, &mut rng).unwrap();

    assert_eq!(bodies.len(), 120);
    assert_eq!(&bodies[..50], &first_batch[..]);
    assert_no_overlaps(&bodies);
}

#[test]
fn test_spawn_shrink_truncates_from_the_end() {
    let mut rng = ChaChaRng::seed_from_u64(9);
    let boundary = Boundary::new(30_000.0, 30_000.0);
    let mut bodies = Vec::new();

    spawn(&mut bodies, &boundary, 40, &SpawnConfig::default(), &mut rng).unwrap();
    let before = bodies.clone();

    let report = spawn(&mut bodies, &boundary, 15, &SpawnConfig::default(), &mut rng).unwrap();

    assert_eq!(report.removed, 25);
    assert_eq!(report.added, 0);
    assert_eq!(bodies, before[..15].to_vec());
}

#[test]
fn test_spawn_same_count_is_noop() {
    let mut rng = ChaChaRng::seed_from_u64(9);
    let boundary = Boundary::new(30_000.0, 30_000.0);
    let mut bodies = Vec::new();

    spawn(&mut bodies, &boundary, 10, &SpawnConfig::default(), &mut rng).unwrap();
    let report = spawn(&mut bodies, &boundary, 10, &SpawnConfig::default(), &mut rng).unwrap();

    assert_eq!(report, SpawnReport::default());
    assert_eq!(bodies.len(), 10);
}

#[test]
fn test_spawn_is_deterministic_for_a_seed() {
    let boundary = Boundary::new(20_000.0, 20_000.0);
    let config = SpawnConfig::default();

    let mut a = Vec::new();
    let mut b = Vec::new();
    spawn(&mut a, &boundary, 30, &config, &mut ChaChaRng::seed_from_u64(77)).unwrap();
    spawn(&mut b, &boundary, 30, &config, &mut ChaChaRng::seed_from_u64(77)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_placement_exhausted_when_world_is_crowded() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    // Fifty 1001-unit bodies cannot fit in a 3000x3000 world
    let boundary = Boundary::new(3000.0, 3000.0);
    let config = SpawnConfig {
        mass_range: (100.0, 100.0),
        ..SpawnConfig::default()
    };
    let mut bodies = Vec::new();

    match spawn(&mut bodies, &boundary, 50, &config, &mut rng) {
        Err(ParticleError::PlacementExhausted {
            placed,
            requested,
            attempts,
        }) => {
            assert!(placed < 50);
            assert_eq!(requested, 50);
            assert_eq!(attempts, 150);
        }
        other => panic!("expected PlacementExhausted, got {other:?}"),
    }

    // Failed batches leave the collection untouched
    assert!(bodies.is_empty());
}

#[test]
fn test_failed_growth_keeps_existing_bodies() {
    let mut rng = ChaChaRng::seed_from_u64(2);
    let boundary = Boundary::new(3000.0, 3000.0);
    let config = SpawnConfig {
        mass_range: (100.0, 100.0),
        ..SpawnConfig::default()
    };
    let mut bodies = Vec::new();

    spawn(&mut bodies, &boundary, 1, &config, &mut rng).unwrap();
    let before = bodies.clone();

    assert!(spawn(&mut bodies, &boundary, 40, &config, &mut rng).is_err());
    assert_eq!(bodies, before);
}

#[test]
fn test_world_too_small() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let boundary = Boundary::new(300.0, 300.0);
    let config = SpawnConfig {
        mass_range: (100.0, 100.0),
        ..SpawnConfig::default()
    };

    let err = spawn(&mut Vec::new(), &boundary, 50, &config, &mut rng).unwrap_err();
    assert_eq!(
        err,
        ParticleError::WorldTooSmall {
            diameter: 1001.0,
            width: 300.0,
            height: 300.0,
        }
    );
}

#[test]
fn test_body_exactly_filling_the_world_fits() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let boundary = Boundary::new(1001.0, 1001.0);
    let config = SpawnConfig {
        mass_range: (100.0, 100.0),
        ..SpawnConfig::default()
    };
    let mut bodies = Vec::new();

    spawn(&mut bodies, &boundary, 1, &config, &mut rng).unwrap();
    assert_eq!(bodies[0].position.x, 0.0);
    assert_eq!(bodies[0].position.y, 0.0);
}

#[test]
fn test_degenerate_size_propagates() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let config = SpawnConfig {
        mass_range: (1.0, 2.0),
        ..SpawnConfig::default()
    };
    // 20 * sqrt(2/100) ≈ 2.8, below the visible minimum
    let model = SizeModel {
        reference_mass: 100.0,
        reference_diameter: 20.0,
        min_diameter: 5.0,
    };
    let mut bodies = Vec::new();

    let err = spawn_to(
        &mut bodies,
        &Boundary::new(10_000.0, 10_000.0),
        3,
        &config,
        &model,
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, ParticleError::DegenerateSize { .. }));
    assert!(bodies.is_empty());
}

#[test]
fn test_sub_one_mass_range_is_invalid_config() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let config = SpawnConfig {
        mass_range: (0.1, 0.5),
        ..SpawnConfig::default()
    };

    let err = spawn(
        &mut Vec::new(),
        &Boundary::new(10_000.0, 10_000.0),
        3,
        &config,
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, ParticleError::InvalidConfig(_)));
}

#[test]
fn test_inverted_mass_range_is_invalid_config() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let config = SpawnConfig {
        mass_range: (50.0, 10.0),
        ..SpawnConfig::default()
    };
    let mut bodies = Vec::new();

    let err = spawn(
        &mut bodies,
        &Boundary::new(10_000.0, 10_000.0),
        3,
        &config,
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, ParticleError::InvalidConfig(_)));
    assert!(bodies.is_empty());
}

#[test]
fn test_negative_max_speed_is_invalid_config() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let config = SpawnConfig {
        max_speed: -1.0,
        ..SpawnConfig::default()
    };

    let err = place_bodies(
        &[],
        &Boundary::new(10_000.0, 10_000.0),
        3,
        &config,
        &SizeModel::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, ParticleError::InvalidConfig(_)));

    let err = sample_body(&mut rng, &config, &SizeModel::default()).unwrap_err();
    assert!(matches!(err, ParticleError::InvalidConfig(_)));
}

#[test]
fn test_shrink_from_above_population_limit() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let boundary = Boundary::new(30_000.0, 30_000.0);
    let mut bodies = Vec::new();
    spawn(&mut bodies, &boundary, 20, &SpawnConfig::default(), &mut rng).unwrap();
    let before = bodies.clone();

    let limited = SpawnConfig {
        max_bodies: 10,
        ..SpawnConfig::default()
    };

    // Still above the limit after shrinking, but shrinking never fails
    let report = spawn(&mut bodies, &boundary, 15, &limited, &mut rng).unwrap();
    assert_eq!(report.removed, 5);
    assert_eq!(bodies, before[..15].to_vec());

    // Growing past the limit is still refused
    let err = spawn(&mut bodies, &boundary, 16, &limited, &mut rng).unwrap_err();
    assert_eq!(
        err,
        ParticleError::PopulationLimitExceeded {
            requested: 16,
            limit: 10
        }
    );
    assert_eq!(bodies.len(), 15);
}

#[test]
fn test_shrink_ignores_invalid_config() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let boundary = Boundary::new(30_000.0, 30_000.0);
    let mut bodies = Vec::new();
    spawn(&mut bodies, &boundary, 5, &SpawnConfig::default(), &mut rng).unwrap();

    let broken = SpawnConfig {
        mass_range: (50.0, 10.0),
        ..SpawnConfig::default()
    };
    let report = spawn(&mut bodies, &boundary, 2, &broken, &mut rng).unwrap();

    assert_eq!(report.removed, 3);
    assert_eq!(bodies.len(), 2);
}

#[test]
fn test_population_limit() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let config = SpawnConfig {
        max_bodies: 10,
        ..SpawnConfig::default()
    };

    let err = spawn(
        &mut Vec::new(),
        &Boundary::new(10_000.0, 10_000.0),
        11,
        &config,
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParticleError::PopulationLimitExceeded {
            requested: 11,
            limit: 10
        }
    );
}

#[test]
fn test_place_bodies_zero_count() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let (bodies, attempts) = place_bodies(
        &[],
        &Boundary::new(10.0, 10.0),
        0,
        &SpawnConfig::default(),
        &SizeModel::default(),
        &mut rng,
    )
    .unwrap();

    assert!(bodies.is_empty());
    assert_eq!(attempts, 0);
}
