use nalgebra::{Point2, Vector2};
use serde::Serialize;

use crate::error::Result;
use crate::size::SizeModel;

/// A circular point mass
///
/// `position` is the top-left corner of the body's bounding square, so a body
/// lies inside the world when `0 <= position <= boundary - diameter` on each
/// axis. Collision geometry works on [`Body::center`].
///
/// Mass and radius are fixed at construction; position and velocity are
/// updated in place every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    pub position: Point2<f64>,  // world units
    pub velocity: Vector2<f64>, // world units / second
    mass: f64,
    radius: f64,
}

impl Body {
    /// Creates a body at the origin, sized with the default reference scale
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::Vector2;
    /// use particles::body::Body;
    ///
    /// let body = Body::new(100.0, Vector2::new(10.0, 0.0)).unwrap();
    /// assert_eq!(body.diameter(), 1001.0);
    ///
    /// assert!(Body::new(0.0, Vector2::zeros()).is_err());
    /// ```
    pub fn new(mass: f64, velocity: Vector2<f64>) -> Result<Self> {
        Self::with_model(&SizeModel::default(), mass, velocity)
    }

    /// Creates a body at the origin, sized with the given model
    pub fn with_model(model: &SizeModel, mass: f64, velocity: Vector2<f64>) -> Result<Self> {
        let radius = model.radius(mass)?;
        Ok(Body {
            position: Point2::origin(),
            velocity,
            mass,
            radius,
        })
    }

    /// Places the body so that its corner sits at `position`
    pub fn at(mut self, position: Point2<f64>) -> Self {
        self.position = position;
        self
    }

    /// Places the body so that its centre sits at `center`
    pub fn centered_at(mut self, center: Point2<f64>) -> Self {
        self.position = center - Vector2::repeat(self.radius);
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn center(&self) -> Point2<f64> {
        self.position + Vector2::repeat(self.radius)
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.center() - other.center()).magnitude()
    }
}

/// Total momentum of a collection of bodies
pub fn total_momentum(bodies: &[Body]) -> Vector2<f64> {
    bodies.iter().map(|b| b.momentum()).sum()
}

/// Total kinetic energy of a collection of bodies
pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| b.kinetic_energy()).sum()
}
