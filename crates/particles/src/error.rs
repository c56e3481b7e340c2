//! Error types for body construction and placement
//!
//! Every variant is raised at population-change time (creating bodies,
//! spawning batches, loading configuration). Advancing the simulation
//! never fails once the bodies exist.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParticleError {
    /// Mass below the minimum of one mass unit
    #[error("mass {mass} is below the minimum of 1")]
    InvalidMass { mass: f64 },

    /// Derived diameter is too small to be displayed
    #[error("mass {mass} yields diameter {diameter}, below the minimum visible size")]
    DegenerateSize { mass: f64, diameter: f64 },

    /// The body cannot fit inside the world on at least one axis
    #[error("body of diameter {diameter} does not fit in a {width}x{height} world")]
    WorldTooSmall {
        diameter: f64,
        width: f64,
        height: f64,
    },

    /// Rejection sampling ran out of attempts
    #[error(
        "placed {placed} of {requested} bodies before exhausting {attempts} placement attempts"
    )]
    PlacementExhausted {
        placed: usize,
        requested: usize,
        attempts: usize,
    },

    #[error("requested {requested} bodies, limit is {limit}")]
    PopulationLimitExceeded { requested: usize, limit: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ParticleError>;
