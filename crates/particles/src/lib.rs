//! Elastic-collision core for circular bodies in a bounded 2D world
//!
//! The crate advances a set of disks, bounces them off the edges of an
//! axis-aligned world and off each other with perfectly elastic impulses,
//! and places new bodies without initial overlap. It knows nothing about
//! pixels or windows: callers pass in a time step and a [`Boundary`] and read
//! back body positions and radii.
//!
//! ```
//! use particles::boundary::Boundary;
//! use particles::config::SpawnConfig;
//! use particles::simulation::step;
//! use particles::size::SizeModel;
//! use particles::spawn::spawn_to;
//! use rand::SeedableRng;
//! use rand_chacha::ChaChaRng;
//!
//! let boundary = Boundary::new(30_000.0, 20_000.0);
//! let mut rng = ChaChaRng::seed_from_u64(1);
//! let mut bodies = Vec::new();
//!
//! spawn_to(&mut bodies, &boundary, 40, &SpawnConfig::default(), &SizeModel::default(), &mut rng)
//!     .unwrap();
//!
//! for _ in 0..60 {
//!     step(&mut bodies, &boundary, 1.0 / 60.0);
//! }
//! assert_eq!(bodies.len(), 40);
//! ```

pub mod body;
pub mod boundary;
pub mod collisions;
pub mod config;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod size;
pub mod spawn;

#[cfg(test)]
mod spawn_test;

pub use body::Body;
pub use boundary::Boundary;
pub use error::{ParticleError, Result};
pub use simulation::{Simulation, step};
pub use size::mass_to_diameter;
pub use spawn::spawn_to;
