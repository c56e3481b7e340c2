//! Collisions with the world boundary
//!
//! Each axis is handled on its own. A body past the low edge is clamped to
//! `0`, a body past the high edge to `boundary - diameter`, and in both cases
//! the velocity component on that axis is negated. A corner hit therefore
//! flips both components in the same tick, which is not exact corner geometry.

use crate::body::Body;
use crate::boundary::Boundary;

/// Reflect one axis; returns whether the body was touching a wall
fn reflect_axis(position: &mut f64, velocity: &mut f64, hi: f64) -> bool {
    if *position < 0.0 {
        *velocity = -*velocity;
        *position = 0.0;
        true
    } else if *position > hi {
        *velocity = -*velocity;
        *position = hi;
        true
    } else {
        false
    }
}

/// Clamp a body into the boundary and reflect the velocity on each axis it left
///
/// Returns the number of axes that were reflected (0, 1 or 2).
///
/// The body must fit in the world (`diameter <= width, height`); spawning
/// enforces this.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use particles::body::Body;
/// use particles::boundary::Boundary;
/// use particles::collisions::resolve_wall;
///
/// let boundary = Boundary::new(2000.0, 2000.0);
/// let mut body = Body::new(100.0, Vector2::new(-50.0, 10.0))
///     .unwrap()
///     .at(Point2::new(-0.5, 300.0));
///
/// assert_eq!(resolve_wall(&mut body, &boundary), 1);
/// assert_eq!(body.position.x, 0.0);
/// assert_eq!(body.velocity, Vector2::new(50.0, 10.0));
/// ```
pub fn resolve_wall(body: &mut Body, boundary: &Boundary) -> usize {
    let diameter = body.diameter();
    let hi_x = boundary.width - diameter;
    let hi_y = boundary.height - diameter;

    let hit_x = reflect_axis(&mut body.position.x, &mut body.velocity.x, hi_x);
    let hit_y = reflect_axis(&mut body.position.y, &mut body.velocity.y, hi_y);

    usize::from(hit_x) + usize::from(hit_y)
}

/// Resolve wall collisions for every body, returning the total reflections
pub fn resolve_walls(bodies: &mut [Body], boundary: &Boundary) -> usize {
    bodies
        .iter_mut()
        .map(|body| resolve_wall(body, boundary))
        .sum()
}
