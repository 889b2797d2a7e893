// crates/popmap-core/src/layer.rs

//! # Marker layer
//!
//! [`build_layer`] turns `(Dataset, Year)` into the complete set of markers
//! for that year. It is pure: the same inputs always give the same layer, and
//! nothing is diffed against the previous one.

use crate::lookup::PopulationLookup;
use crate::model::{CityFeature, Dataset, LatLng, Year};
use crate::scale::SymbolScale;
use crate::text::{escape_html, group_thousands};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Popup text for a city without a record for the selected year.
pub const NO_DATA: &str = "no data";

/// What to do with a city that has no population for the selected year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Leave the city off the map.
    #[default]
    Omit,
    /// Keep a zero-radius marker whose popup says "no data".
    LabelNoData,
}

/// Circle marker styling passed through to the map library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub fill_color: String,
    pub stroke_color: String,
    pub weight: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill_color: "blue".to_string(),
            stroke_color: "#000".to_string(),
            weight: 1.0,
            fill_opacity: 0.7,
        }
    }
}

/// One circle on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub city: String,
    pub country: String,
    pub position: LatLng,
    pub population: PopulationLookup,
    pub radius: f64,
    /// HTML popup bound to the marker.
    pub popup: String,
}

/// Every marker for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedLayer {
    pub year: Year,
    pub style: MarkerStyle,
    pub markers: Vec<Marker>,
    /// Cities left off because they have no record for `year`.
    pub omitted: usize,
}

impl RenderedLayer {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// Options for [`build_layer`] that stay fixed for the lifetime of a map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerOptions {
    pub scale: SymbolScale,
    pub missing: MissingPolicy,
    pub style: MarkerStyle,
}

/// Builds the marker layer for `year`.
pub fn build_layer(dataset: &Dataset, year: Year, options: &LayerOptions) -> RenderedLayer {
    let mut markers = Vec::with_capacity(dataset.len());
    let mut omitted = 0;

    for feature in dataset.features() {
        match feature.population_in(year) {
            PopulationLookup::Present(population) => markers.push(Marker {
                city: feature.city.clone(),
                country: feature.country.clone(),
                position: feature.point,
                population: PopulationLookup::Present(population),
                radius: options.scale.radius(population),
                popup: popup_text(feature, year, PopulationLookup::Present(population)),
            }),
            PopulationLookup::Absent => match options.missing {
                MissingPolicy::Omit => omitted += 1,
                MissingPolicy::LabelNoData => markers.push(Marker {
                    city: feature.city.clone(),
                    country: feature.country.clone(),
                    position: feature.point,
                    population: PopulationLookup::Absent,
                    radius: 0.0,
                    popup: popup_text(feature, year, PopulationLookup::Absent),
                }),
            },
        }
    }

    debug!(year, markers = markers.len(), omitted, "built marker layer");

    RenderedLayer {
        year,
        style: options.style.clone(),
        markers,
        omitted,
    }
}

/// `<b>City, Country</b><br>Population (1970): 8,000,000`
///
/// The name comes from the dataset and is escaped.
pub fn popup_text(feature: &CityFeature, year: Year, population: PopulationLookup) -> String {
    let value = match population {
        PopulationLookup::Present(n) => group_thousands(n),
        PopulationLookup::Absent => NO_DATA.to_string(),
    };
    format!(
        "<b>{}</b><br>Population ({year}): {value}",
        escape_html(&feature.display_name())
    )
}
