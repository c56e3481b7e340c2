//! Simulation configuration
//!
//! All structs deserialize with `#[serde(default)]`, so a config file only
//! needs the fields it changes.

use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::error::{ParticleError, Result};
use crate::size::{MIN_MASS, REFERENCE_MASS, SizeModel};

/// Parameters for generating new bodies
///
/// # Examples
///
/// ```
/// use particles::config::SpawnConfig;
///
/// let config = SpawnConfig::default();
/// assert_eq!(config.retry_factor, 3);
///
/// // Light, slow bodies only
/// let gentle = SpawnConfig {
///     mass_range: (1.0, 10.0),
///     max_speed: 20.0,
///     ..SpawnConfig::default()
/// };
/// assert!(gentle.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Inclusive range masses are drawn from, uniformly
    pub mass_range: (f64, f64),

    /// Upper bound of the uniformly drawn initial speed (world units / second)
    pub max_speed: f64,

    /// Placement attempts allowed per requested body, pooled over a batch
    pub retry_factor: usize,

    /// Largest population the exhaustive pair scan is expected to handle
    pub max_bodies: usize,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            mass_range: (MIN_MASS, REFERENCE_MASS),
            max_speed: 200.0,
            retry_factor: 3,
            max_bodies: 1000,
        }
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.mass_range;
        if !(lo >= MIN_MASS) || !(hi >= lo) {
            return Err(ParticleError::InvalidConfig(format!(
                "mass range ({lo}, {hi}) must satisfy 1 <= min <= max"
            )));
        }
        if !(self.max_speed >= 0.0) {
            return Err(ParticleError::InvalidConfig(format!(
                "max speed {} must be non-negative",
                self.max_speed
            )));
        }
        if self.retry_factor == 0 {
            return Err(ParticleError::InvalidConfig(
                "retry factor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for a [`Simulation`](crate::simulation::Simulation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    /// Seed for the placement RNG
    pub seed: u64,
    pub spawn: SpawnConfig,
    pub size: SizeModel,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50_000.0,
            height: 50_000.0,
            seed: 42,
            spawn: SpawnConfig::default(),
            size: SizeModel::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    ///
    /// # Examples
    ///
    /// ```
    /// use particles::config::SimulationConfig;
    ///
    /// let config = SimulationConfig::from_json(r#"{ "width": 8000, "seed": 7 }"#).unwrap();
    /// assert_eq!(config.width, 8000.0);
    /// assert_eq!(config.height, 50_000.0);
    /// assert_eq!(config.seed, 7);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ParticleError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn boundary(&self) -> Boundary {
        Boundary::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(ParticleError::InvalidConfig(format!(
                "world dimensions {}x{} must be positive",
                self.width, self.height
            )));
        }
        if !(self.size.reference_mass >= MIN_MASS) || !(self.size.reference_diameter > 0.0) {
            return Err(ParticleError::InvalidConfig(
                "size model reference must be a positive mass >= 1 and diameter".to_string(),
            ));
        }
        self.spawn.validate()
    }
}
