//! Pairwise collision detection
//!
//! Two tests share the same centre/radius geometry:
//! - [`overlaps`]: squared-distance test used while placing new bodies
//! - [`contact_normal`]: distance test that also yields the unit contact
//!   normal, used every tick
//!
//! There is no broad phase. Every unordered pair `{i, j}, i < j` is checked
//! once per tick, which is fine for populations up to roughly a thousand
//! bodies.

use nalgebra::Vector2;

use crate::body::Body;

/// Whether two bodies touch or overlap
///
/// Avoids the square root: `|c_a - c_b|² <= (r_a + r_b)²`.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use particles::body::Body;
/// use particles::collisions::overlaps;
///
/// let a = Body::new(100.0, Vector2::zeros()).unwrap().centered_at(Point2::new(0.0, 0.0));
/// let b = Body::new(100.0, Vector2::zeros()).unwrap().centered_at(Point2::new(1001.0, 0.0));
/// let c = Body::new(100.0, Vector2::zeros()).unwrap().centered_at(Point2::new(1002.0, 0.0));
///
/// assert!(overlaps(&a, &b)); // exactly touching
/// assert!(!overlaps(&a, &c));
/// ```
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let reach = a.radius() + b.radius();
    (a.center() - b.center()).magnitude_squared() <= reach * reach
}

/// Unit normal pointing from `b` to `a` if the bodies are in contact
///
/// Returns `None` when the bodies are apart, and also when their centres
/// coincide exactly, since no normal is defined there.
pub fn contact_normal(a: &Body, b: &Body) -> Option<Vector2<f64>> {
    let delta = a.center() - b.center();
    let distance = delta.magnitude();

    if distance <= a.radius() + b.radius() && distance > 0.0 {
        Some(delta / distance)
    } else {
        None
    }
}

/// A detected contact between two bodies, addressed by index
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// Index of the first body (always lower than `body_b`)
    pub body_a: usize,
    /// Index of the second body
    pub body_b: usize,
    /// Centre-to-centre distance
    pub separation: f64,
    /// Unit normal from `body_b` towards `body_a`
    pub normal: Vector2<f64>,
}

fn check_pair(bodies: &[Body], i: usize, j: usize) -> Option<CollisionEvent> {
    let (a, b) = (&bodies[i], &bodies[j]);
    contact_normal(a, b).map(|normal| CollisionEvent {
        body_a: i,
        body_b: j,
        separation: a.distance_to(b),
        normal,
    })
}

/// All unordered index pairs `(i, j)` with `i < j`, in enumeration order
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

/// Collision detector trait
///
/// Detectors must report pairs in the order they should be resolved.
pub trait PairDetector: Send + Sync {
    /// Detect all contacts in the body collection
    fn detect(&self, bodies: &[Body]) -> Vec<CollisionEvent>;
}

/// Exhaustive O(N²) detector
///
/// # Examples
///
/// ```
/// use nalgebra::{Point2, Vector2};
/// use particles::body::Body;
/// use particles::collisions::{ExhaustiveDetector, PairDetector};
///
/// let bodies = vec![
///     Body::new(100.0, Vector2::zeros()).unwrap().centered_at(Point2::new(600.0, 600.0)),
///     Body::new(100.0, Vector2::zeros()).unwrap().centered_at(Point2::new(1500.0, 600.0)),
///     Body::new(100.0, Vector2::zeros()).unwrap().centered_at(Point2::new(5000.0, 600.0)),
/// ];
///
/// let events = ExhaustiveDetector.detect(&bodies);
/// assert_eq!(events.len(), 1);
/// assert_eq!((events[0].body_a, events[0].body_b), (0, 1));
/// ```
pub struct ExhaustiveDetector;

impl PairDetector for ExhaustiveDetector {
    fn detect(&self, bodies: &[Body]) -> Vec<CollisionEvent> {
        pairs(bodies.len())
            .filter_map(|(i, j)| check_pair(bodies, i, j))
            .collect()
    }
}
