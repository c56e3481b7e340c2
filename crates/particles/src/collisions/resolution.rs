//! Elastic collision resolution
//!
//! Each contact is reduced to a 1-D problem along the contact normal `n`.
//! Velocities are split into normal and tangential parts, the normal parts
//! go through the two-body elastic formulas
//!
//! ```text
//! v_a' = ((m_a - m_b) v_a + 2 m_b v_b) / (m_a + m_b)
//! v_b' = ((m_b - m_a) v_b + 2 m_a v_a) / (m_a + m_b)
//! ```
//!
//! and the tangential parts pass through unchanged (no friction). Momentum
//! and kinetic energy are conserved up to rounding.

use nalgebra::Vector2;

use crate::body::Body;
use crate::collisions::CollisionEvent;

/// Rotate a vector 90° counter-clockwise
pub fn rotate90(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Post-collision velocities for a colliding pair
///
/// # Arguments
///
/// * `mass_a` - Mass of the first body
/// * `velocity_a` - Velocity of the first body before the collision
/// * `mass_b` - Mass of the second body
/// * `velocity_b` - Velocity of the second body before the collision
/// * `normal` - Unit contact normal pointing from the second body to the first
///
/// # Returns
///
/// `(velocity_a', velocity_b')` after the collision
///
/// # Examples
///
/// ```
/// use nalgebra::Vector2;
/// use particles::collisions::elastic_velocities;
///
/// // Equal masses swap their normal components
/// let (va, vb) = elastic_velocities(
///     100.0,
///     Vector2::new(-200.0, 0.0),
///     100.0,
///     Vector2::new(200.0, 0.0),
///     Vector2::new(1.0, 0.0),
/// );
/// assert!((va - Vector2::new(200.0, 0.0)).magnitude() < 1e-9);
/// assert!((vb - Vector2::new(-200.0, 0.0)).magnitude() < 1e-9);
/// ```
pub fn elastic_velocities(
    mass_a: f64,
    velocity_a: Vector2<f64>,
    mass_b: f64,
    velocity_b: Vector2<f64>,
    normal: Vector2<f64>,
) -> (Vector2<f64>, Vector2<f64>) {
    let tangent = rotate90(normal);

    let (a_n, a_t) = (velocity_a.dot(&normal), velocity_a.dot(&tangent));
    let (b_n, b_t) = (velocity_b.dot(&normal), velocity_b.dot(&tangent));

    let total = mass_a + mass_b;
    let a_n_out = ((mass_a - mass_b) * a_n + 2.0 * mass_b * b_n) / total;
    let b_n_out = ((mass_b - mass_a) * b_n + 2.0 * mass_a * a_n) / total;

    (
        normal * a_n_out + tangent * a_t,
        normal * b_n_out + tangent * b_t,
    )
}

/// Apply the elastic impulse for one contact to the bodies it names
pub fn resolve_pair(bodies: &mut [Body], event: &CollisionEvent) {
    let (a, b) = (bodies[event.body_a], bodies[event.body_b]);
    let (va, vb) = elastic_velocities(a.mass(), a.velocity, b.mass(), b.velocity, event.normal);

    bodies[event.body_a].velocity = va;
    bodies[event.body_b].velocity = vb;
}

/// Resolve contacts one after another, in the order given
///
/// A body in several contacts enters each later resolution with the velocity
/// produced by the earlier ones, so results depend on event order.
///
/// Returns the number of contacts resolved.
pub fn resolve_collisions(bodies: &mut [Body], events: &[CollisionEvent]) -> usize {
    events.iter().for_each(|event| resolve_pair(bodies, event));
    events.len()
}
