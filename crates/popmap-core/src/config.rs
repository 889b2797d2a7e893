// crates/popmap-core/src/config.rs
use crate::error::{PopMapError, Result};
use crate::layer::{LayerOptions, MarkerStyle, MissingPolicy};
use crate::model::Year;
use crate::scale::{SymbolScale, RADIUS_DIVISOR};
use crate::timeline::{Timeline, YearRange, INITIAL_YEAR, STEP};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything that can be tuned about a map. Every field has a default, so
/// `{}` is a valid configuration file.
///
/// ```json
/// {
///   "dataset": "data.geojson",
///   "year_min": 1950,
///   "year_max": 2030,
///   "missing": "label_no_data",
///   "style": { "fill_color": "#3388ff" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Path (CLI) or URL (browser) of the GeoJSON dataset.
    pub dataset: String,
    pub year_min: Year,
    pub year_max: Year,
    pub initial_year: Year,
    /// Arrow-button step in years.
    pub step: Year,
    pub radius_divisor: f64,
    pub missing: MissingPolicy,
    pub style: MarkerStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            dataset: "data.geojson".to_string(),
            year_min: 1950,
            year_max: 2030,
            initial_year: INITIAL_YEAR,
            step: STEP,
            radius_divisor: RADIUS_DIVISOR,
            missing: MissingPolicy::default(),
            style: MarkerStyle::default(),
        }
    }
}

impl MapConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            PopMapError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        YearRange::new(self.year_min, self.year_max)?;
        SymbolScale::new(self.radius_divisor)?;
        if self.step <= 0 {
            return Err(PopMapError::Config(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if !(0.0..=1.0).contains(&self.style.fill_opacity) {
            return Err(PopMapError::Config(format!(
                "fill_opacity must be within 0..=1, got {}",
                self.style.fill_opacity
            )));
        }
        Ok(())
    }

    pub fn year_range(&self) -> Result<YearRange> {
        YearRange::new(self.year_min, self.year_max)
    }

    pub fn timeline(&self) -> Result<Timeline> {
        Timeline::new(self.year_range()?, self.initial_year).with_step(self.step)
    }

    pub fn layer_options(&self) -> Result<LayerOptions> {
        Ok(LayerOptions {
            scale: SymbolScale::new(self.radius_divisor)?,
            missing: self.missing,
            style: self.style.clone(),
        })
    }
}
