//! Placement of new bodies
//!
//! New bodies are generated by rejection sampling:
//!
//! 1. Draw a mass uniformly from [`SpawnConfig::mass_range`]
//! 2. Draw a speed uniformly from `[0, max_speed]` and a direction uniformly
//!    from `[0, 2π)`
//! 3. Size the body with the [`SizeModel`]
//! 4. Draw a centre uniformly from `[r, size - r]` on each axis
//! 5. Reject the position if it overlaps any body already placed, and retry
//!
//! Attempts are pooled over the whole batch: a batch of `n` bodies may make
//! at most `retry_factor * n` position draws before failing.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};
use rand::Rng;
use tracing::{debug, warn};

use crate::body::Body;
use crate::boundary::Boundary;
use crate::collisions::overlaps;
use crate::config::SpawnConfig;
use crate::error::{ParticleError, Result};
use crate::size::SizeModel;

/// Outcome of a [`spawn_to`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub added: usize,
    pub removed: usize,
    /// Position draws used, including rejected ones
    pub attempts: usize,
}

/// Draw a velocity with uniform speed and uniform direction
///
/// # Panics
///
/// If `max_speed` is negative or NaN. [`SpawnConfig::validate`] rules both out.
pub fn sample_velocity<R: Rng + ?Sized>(rng: &mut R, max_speed: f64) -> Vector2<f64> {
    let speed = rng.random_range(0.0..=max_speed);
    let angle = rng.random_range(0.0..TAU);
    Vector2::new(speed * angle.cos(), speed * angle.sin())
}

/// Draw a mass and velocity and build an unplaced body from them
///
/// # Errors
///
/// [`ParticleError::InvalidConfig`] if `config` does not validate, plus
/// anything [`Body::with_model`] returns for the drawn mass.
pub fn sample_body<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SpawnConfig,
    model: &SizeModel,
) -> Result<Body> {
    config.validate()?;
    let (lo, hi) = config.mass_range;
    let mass = rng.random_range(lo..=hi);
    let velocity = sample_velocity(rng, config.max_speed);
    Body::with_model(model, mass, velocity)
}

/// Draw a centre for `body` that keeps it fully inside `boundary`
fn sample_center<R: Rng + ?Sized>(rng: &mut R, body: &Body, boundary: &Boundary) -> Point2<f64> {
    let r = body.radius();
    Point2::new(
        rng.random_range(r..=boundary.width - r),
        rng.random_range(r..=boundary.height - r),
    )
}

/// Generate `count` bodies that overlap neither `existing` nor each other
///
/// # Arguments
///
/// * `existing` - Bodies already in the world; new bodies must avoid them
/// * `boundary` - World the new bodies must fit inside
/// * `count` - Number of bodies to generate
/// * `config` - Mass range, speed limit and retry factor
/// * `model` - Size model used to derive radii
/// * `rng` - Random source
///
/// # Returns
///
/// The new bodies and the number of position draws used. On failure nothing
/// is returned, so callers can keep their collection untouched.
///
/// # Errors
///
/// * [`ParticleError::InvalidConfig`] if `config` does not validate
/// * [`ParticleError::InvalidMass`] / [`ParticleError::DegenerateSize`] if the
///   mass range produces an invalid body
/// * [`ParticleError::WorldTooSmall`] if a body is larger than the world
/// * [`ParticleError::PlacementExhausted`] if the attempt budget runs out
///
/// # Examples
///
/// ```
/// use particles::boundary::Boundary;
/// use particles::collisions::overlaps;
/// use particles::config::SpawnConfig;
/// use particles::size::SizeModel;
/// use particles::spawn::place_bodies;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let boundary = Boundary::new(20_000.0, 20_000.0);
///
/// let (bodies, _) = place_bodies(
///     &[],
///     &boundary,
///     20,
///     &SpawnConfig::default(),
///     &SizeModel::default(),
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(bodies.len(), 20);
/// assert!(!overlaps(&bodies[0], &bodies[1]));
/// ```
pub fn place_bodies<R: Rng + ?Sized>(
    existing: &[Body],
    boundary: &Boundary,
    count: usize,
    config: &SpawnConfig,
    model: &SizeModel,
    rng: &mut R,
) -> Result<(Vec<Body>, usize)> {
    config.validate()?;

    let budget = config.retry_factor * count;
    let mut placed: Vec<Body> = Vec::with_capacity(count);
    let mut attempts = 0;

    while placed.len() < count {
        let body = sample_body(rng, config, model)?;

        if !boundary.fits(body.diameter()) {
            return Err(ParticleError::WorldTooSmall {
                diameter: body.diameter(),
                width: boundary.width,
                height: boundary.height,
            });
        }

        let accepted = loop {
            if attempts >= budget {
                warn!(
                    placed = placed.len(),
                    requested = count,
                    attempts,
                    "placement budget exhausted"
                );
                return Err(ParticleError::PlacementExhausted {
                    placed: placed.len(),
                    requested: count,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = body.centered_at(sample_center(rng, &body, boundary));
            let clear = existing
                .iter()
                .chain(placed.iter())
                .all(|other| !overlaps(&candidate, other));

            if clear {
                break candidate;
            }
        };

        placed.push(accepted);
    }

    Ok((placed, attempts))
}

/// Grow or shrink `bodies` to exactly `desired` bodies
///
/// Shrinking drops bodies from the end and cannot fail. Growing places the
/// missing bodies with [`place_bodies`]; if that fails, `bodies` is left as
/// it was.
///
/// # Arguments
///
/// * `bodies` - Collection to resize in place
/// * `boundary` - World new bodies are placed in
/// * `desired` - Target population
/// * `config` - Spawn parameters and population limit
/// * `model` - Size model used to derive radii
/// * `rng` - Random source
///
/// # Returns
///
/// How many bodies were added or removed and how many placement draws it took
///
/// # Errors
///
/// Only when growing: [`ParticleError::PopulationLimitExceeded`] if `desired`
/// is above `config.max_bodies`, plus anything [`place_bodies`] returns.
pub fn spawn_to<R: Rng + ?Sized>(
    bodies: &mut Vec<Body>,
    boundary: &Boundary,
    desired: usize,
    config: &SpawnConfig,
    model: &SizeModel,
    rng: &mut R,
) -> Result<SpawnReport> {
    let current = bodies.len();

    if desired <= current {
        bodies.truncate(desired);
        debug!(removed = current - desired, remaining = desired, "population shrunk");
        return Ok(SpawnReport {
            removed: current - desired,
            ..SpawnReport::default()
        });
    }

    if desired > config.max_bodies {
        return Err(ParticleError::PopulationLimitExceeded {
            requested: desired,
            limit: config.max_bodies,
        });
    }

    let (new_bodies, attempts) = place_bodies(
        bodies.as_slice(),
        boundary,
        desired - current,
        config,
        model,
        rng,
    )?;
    let added = new_bodies.len();
    bodies.extend(new_bodies);

    debug!(added, attempts, total = bodies.len(), "population grown");

    Ok(SpawnReport {
        added,
        removed: 0,
        attempts,
    })
}
