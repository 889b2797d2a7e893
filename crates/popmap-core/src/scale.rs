// crates/popmap-core/src/scale.rs
use crate::error::{PopMapError, Result};
use crate::model::Population;
use serde::{Deserialize, Serialize};

/// Calibration constant for the world-extent map: `sqrt(population) / 500`.
pub const RADIUS_DIVISOR: f64 = 500.0;

/// Square-root symbol scaling.
///
/// Marker *area* grows linearly with population, so a city twice as large
/// gets a circle twice the area, not twice the radius. Markers and legend
/// swatches both go through this, which keeps them comparable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolScale {
    divisor: f64,
}

impl Default for SymbolScale {
    fn default() -> Self {
        Self {
            divisor: RADIUS_DIVISOR,
        }
    }
}

impl SymbolScale {
    /// A scale with a custom divisor. Must be finite and positive.
    pub fn new(divisor: f64) -> Result<Self> {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(PopMapError::Config(format!(
                "radius divisor must be finite and positive, got {divisor}"
            )));
        }
        Ok(Self { divisor })
    }

    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Circle radius in pixels for `population`.
    #[inline]
    pub fn radius(&self, population: Population) -> f64 {
        (population as f64).sqrt() / self.divisor
    }
}

/// [`SymbolScale::radius`] with the default divisor.
#[inline]
pub fn radius(population: Population) -> f64 {
    SymbolScale::default().radius(population)
}
