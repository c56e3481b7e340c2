use serde::{Deserialize, Serialize};

/// Axis-aligned world rectangle `[0, width] x [0, height]`
///
/// The boundary is owned by the caller and passed into every operation that
/// needs it; nothing in this crate caches it between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub width: f64,
    pub height: f64,
}

impl Boundary {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a square of the given edge length fits on both axes
    pub fn fits(&self, diameter: f64) -> bool {
        diameter <= self.width && diameter <= self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
