//! Mass to size mapping
//!
//! Bodies are drawn as disks whose *area* scales with mass, so the diameter
//! grows with the square root of the mass ratio:
//!
//! ```text
//! d(m) = d_ref * sqrt(m / m_ref)
//! ```
//!
//! Doubling the mass of a body multiplies its diameter by √2, not 2.

use serde::{Deserialize, Serialize};

use crate::error::{ParticleError, Result};

/// Mass of the reference body
pub const REFERENCE_MASS: f64 = 100.0;

/// Diameter of the reference body (odd so the disk has a centre pixel)
pub const REFERENCE_DIAMETER: f64 = 1001.0;

/// Smallest diameter a body may have and still be visible
pub const MIN_DIAMETER: f64 = 5.0;

/// Smallest mass a body may have
pub const MIN_MASS: f64 = 1.0;

/// Fixed reference scale used to derive body sizes from masses
///
/// # Examples
///
/// ```
/// use particles::size::SizeModel;
///
/// let model = SizeModel::default();
///
/// // The reference mass maps exactly onto the reference diameter
/// assert_eq!(model.diameter(100.0).unwrap(), 1001.0);
///
/// // A quarter of the mass gives half the diameter
/// assert!((model.diameter(25.0).unwrap() - 500.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeModel {
    pub reference_mass: f64,
    pub reference_diameter: f64,
    pub min_diameter: f64,
}

impl Default for SizeModel {
    fn default() -> Self {
        Self {
            reference_mass: REFERENCE_MASS,
            reference_diameter: REFERENCE_DIAMETER,
            min_diameter: MIN_DIAMETER,
        }
    }
}

impl SizeModel {
    /// Diameter of a body of the given mass
    ///
    /// # Errors
    ///
    /// * [`ParticleError::InvalidMass`] if `mass < 1` (or NaN)
    /// * [`ParticleError::DegenerateSize`] if the diameter is below `min_diameter`
    pub fn diameter(&self, mass: f64) -> Result<f64> {
        // Written so that NaN fails the check as well
        if !(mass >= MIN_MASS) {
            return Err(ParticleError::InvalidMass { mass });
        }

        let diameter = self.reference_diameter * (mass / self.reference_mass).sqrt();

        if diameter < self.min_diameter {
            return Err(ParticleError::DegenerateSize { mass, diameter });
        }

        Ok(diameter)
    }

    /// Radius of a body of the given mass
    pub fn radius(&self, mass: f64) -> Result<f64> {
        self.diameter(mass).map(|d| d / 2.0)
    }

    /// Smallest mass that still yields a visible body under this model
    pub fn min_visible_mass(&self) -> f64 {
        let ratio = self.min_diameter / self.reference_diameter;
        (self.reference_mass * ratio * ratio).max(MIN_MASS)
    }
}

/// Diameter of a body of the given mass under the default reference scale
///
/// Exposed for renderers that need to size a sprite to match a body.
///
/// # Examples
///
/// ```
/// use particles::size::mass_to_diameter;
///
/// assert!(mass_to_diameter(0.5).is_err());
/// assert!(mass_to_diameter(400.0).unwrap() > mass_to_diameter(100.0).unwrap());
/// ```
pub fn mass_to_diameter(mass: f64) -> Result<f64> {
    SizeModel::default().diameter(mass)
}
