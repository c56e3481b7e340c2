//! The per-tick pipeline and an owning simulation wrapper
//!
//! One tick is three full passes over the body collection:
//!
//! 1. drift every body ([`integrator::drift`])
//! 2. clamp and reflect at the walls ([`walls::resolve_walls`])
//! 3. detect contacts and resolve them one by one, in pair order
//!
//! Collisions are only looked for after the drift, so a body that moves
//! further than a collision partner's size in one tick can pass through it.

use nalgebra::Vector2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::trace;

use crate::body::{self, Body};
use crate::boundary::Boundary;
use crate::collisions::{ExhaustiveDetector, PairDetector, resolve_collisions, walls};
use crate::config::SimulationConfig;
use crate::error::{ParticleError, Result};
use crate::integrator;
use crate::spawn::{SpawnReport, spawn_to};

/// Counts gathered during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Velocity components reflected at the walls
    pub wall_reflections: usize,
    /// Body pairs resolved
    pub pair_collisions: usize,
}

/// Advance `bodies` by `dt` seconds inside `boundary`
///
/// `dt` must be non-negative. Never fails for bodies that fit the world.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use particles::body::Body;
/// use particles::boundary::Boundary;
/// use particles::simulation::step;
///
/// let boundary = Boundary::new(10_000.0, 10_000.0);
/// let mut bodies = vec![
///     Body::new(100.0, Vector2::new(200.0, 0.0)).unwrap().centered_at(Point2::new(1000.0, 5000.0)),
///     Body::new(100.0, Vector2::new(-200.0, 0.0)).unwrap().centered_at(Point2::new(2010.0, 5000.0)),
/// ];
///
/// let report = step(&mut bodies, &boundary, 0.1);
/// assert_eq!(report.pair_collisions, 1);
/// assert!(bodies[0].velocity.x < 0.0);
/// ```
pub fn step(bodies: &mut [Body], boundary: &Boundary, dt: f64) -> StepReport {
    step_with(bodies, boundary, dt, &ExhaustiveDetector)
}

/// [`step`] with a caller-chosen pair detector
pub fn step_with(
    bodies: &mut [Body],
    boundary: &Boundary,
    dt: f64,
    detector: &dyn PairDetector,
) -> StepReport {
    integrator::drift(bodies, dt);
    let wall_reflections = walls::resolve_walls(bodies, boundary);

    // Only velocities change during resolution, so contacts found up front
    // are the same ones a pair-by-pair sweep would find.
    let events = detector.detect(bodies);
    let pair_collisions = resolve_collisions(bodies, &events);

    trace!(dt, wall_reflections, pair_collisions, "step");

    StepReport {
        wall_reflections,
        pair_collisions,
    }
}

/// Bodies, world and placement RNG owned together
///
/// # Examples
///
/// ```
/// use particles::config::SimulationConfig;
/// use particles::simulation::Simulation;
///
/// let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
/// sim.set_body_count(25).unwrap();
///
/// let t = sim.integrate(1.0 / 120.0, 120);
/// assert!((t - 1.0).abs() < 1e-9);
/// assert_eq!(sim.body_count(), 25);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    boundary: Boundary,
    bodies: Vec<Body>,
    rng: ChaChaRng,
    time: f64,
}

impl Simulation {
    /// Creates an empty simulation
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            boundary: config.boundary(),
            rng: ChaChaRng::seed_from_u64(config.seed),
            bodies: Vec::new(),
            time: 0.0,
            config,
        })
    }

    /// Creates a simulation seeded with already-built bodies
    pub fn from_bodies(config: SimulationConfig, bodies: Vec<Body>) -> Result<Self> {
        let mut sim = Self::new(config)?;
        sim.bodies = bodies;
        Ok(sim)
    }

    /// Advance by one tick of `dt` seconds
    pub fn step(&mut self, dt: f64) -> StepReport {
        let report = step(&mut self.bodies, &self.boundary, dt);
        self.time += dt;
        report
    }

    /// Advance by `n_steps` ticks, returning the elapsed simulated time
    pub fn integrate(&mut self, dt: f64, n_steps: usize) -> f64 {
        for _ in 0..n_steps {
            self.step(dt);
        }
        self.time
    }

    /// Grow or shrink the population; see [`spawn_to`]
    pub fn set_body_count(&mut self, desired: usize) -> Result<SpawnReport> {
        spawn_to(
            &mut self.bodies,
            &self.boundary,
            desired,
            &self.config.spawn,
            &self.config.size,
            &mut self.rng,
        )
    }

    /// Replace the world boundary used from the next tick on
    ///
    /// Bodies outside the new world are pulled back in by the next step.
    ///
    /// # Errors
    ///
    /// * [`ParticleError::InvalidConfig`] for a non-positive width or height
    /// * [`ParticleError::WorldTooSmall`] if any current body is larger than
    ///   the new world on either axis; the old boundary is kept
    pub fn set_boundary(&mut self, boundary: Boundary) -> Result<()> {
        if !(boundary.width > 0.0) || !(boundary.height > 0.0) {
            return Err(ParticleError::InvalidConfig(format!(
                "world dimensions {}x{} must be positive",
                boundary.width, boundary.height
            )));
        }

        if let Some(body) = self.bodies.iter().find(|b| !boundary.fits(b.diameter())) {
            return Err(ParticleError::WorldTooSmall {
                diameter: body.diameter(),
                width: boundary.width,
                height: boundary.height,
            });
        }

        self.boundary = boundary;
        Ok(())
    }

    /// Read-only snapshot for renderers
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn total_momentum(&self) -> Vector2<f64> {
        body::total_momentum(&self.bodies)
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        body::total_kinetic_energy(&self.bodies)
    }
}
