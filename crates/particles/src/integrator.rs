//! Time integration
//!
//! Bodies move in straight lines between collisions, so integration is a
//! plain drift: `x(t + dt) = x(t) + v * dt`, each axis independently, with no
//! clamping. Wall and pair collisions are handled after the drift.

use nalgebra::{Point2, Vector2};

use crate::body::Body;

/// Advance a single position by `dt` at constant velocity
///
/// `dt` must be non-negative; pacing is the caller's job.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use particles::integrator::integrate;
///
/// let p = integrate(Point2::new(1.0, 2.0), Vector2::new(10.0, -4.0), 0.5);
/// assert_eq!(p, Point2::new(6.0, 0.0));
/// ```
pub fn integrate(position: Point2<f64>, velocity: Vector2<f64>, dt: f64) -> Point2<f64> {
    position + velocity * dt
}

/// Drift every body by `dt`
pub fn drift(bodies: &mut [Body], dt: f64) {
    bodies.iter_mut().for_each(|body| {
        body.position = integrate(body.position, body.velocity, dt);
    });
}
