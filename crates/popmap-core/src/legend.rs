// crates/popmap-core/src/legend.rs
use crate::model::Population;
use crate::scale::SymbolScale;
use serde::{Deserialize, Serialize};

/// Reference populations shown in the legend, smallest first.
pub const LEGEND_VALUES: [Population; 4] = [1_000_000, 5_000_000, 10_000_000, 20_000_000];

pub const LEGEND_TITLE: &str = "Population (millions)";

/// One swatch of the legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub value: Population,
    pub radius: f64,
    /// `"1M"`, `"5M"`, ...
    pub label: String,
}

impl LegendEntry {
    /// Swatch width/height in pixels.
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

/// Fixed reference legend. It does not follow the selected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(scale: &SymbolScale) -> Self {
        Self::with_values(scale, &LEGEND_VALUES)
    }

    pub fn with_values(scale: &SymbolScale, values: &[Population]) -> Self {
        let entries = values
            .iter()
            .map(|&value| LegendEntry {
                value,
                radius: scale.radius(value),
                label: millions_label(value),
            })
            .collect();
        Self {
            title: LEGEND_TITLE.to_string(),
            entries,
        }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new(&SymbolScale::default())
    }
}

/// `value / 1e6` followed by `M`; whole millions print without decimals.
fn millions_label(value: Population) -> String {
    if value % 1_000_000 == 0 {
        format!("{}M", value / 1_000_000)
    } else {
        format!("{}M", value as f64 / 1_000_000.0)
    }
}
