//! Collision handling for bodies in a bounded world
//!
//! Three stages run after every drift:
//! - [`walls`]: clamp bodies into the world and reflect outgoing velocity
//! - [`detection`]: exhaustive O(N²) pair scan
//! - [`resolution`]: frictionless elastic impulse along the contact normal

pub mod detection;
pub mod resolution;
pub mod walls;


pub use detection::{CollisionEvent, ExhaustiveDetector, PairDetector, contact_normal, overlaps};
pub use resolution::{elastic_velocities, resolve_collisions, resolve_pair};
pub use walls::{resolve_wall, resolve_walls};
