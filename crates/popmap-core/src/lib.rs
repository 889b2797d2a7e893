// crates/popmap-core/src/lib.rs

//! popmap-core
//! ===========
//!
//! The non-drawing half of a slider-driven proportional-symbol map of city
//! populations: load a GeoJSON dataset, look up each city's population for
//! the selected year, scale it to a circle radius and hand the finished
//! marker layer to whatever map library does the drawing.
//!
//! ```rust
//! use popmap_core::prelude::*;
//!
//! let doc = r#"{"type":"FeatureCollection","features":[
//!   {"type":"Feature","geometry":{"type":"Point","coordinates":[139.69,35.69]},
//!    "properties":{"city":"Tokyo","country":"Japan","populations":{"1970":8000000}}}]}"#;
//! let dataset = Dataset::from_json_str(doc).unwrap();
//!
//! let layer = build_layer(&dataset, 1970, &LayerOptions::default());
//! assert!(layer.markers()[0].popup.contains("8,000,000"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod layer;
pub mod legend;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod scale;
pub mod text;
pub mod timeline;
pub mod traits;
// Raw input mirror of the GeoJSON document
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::config::MapConfig;
pub use crate::controller::{MapController, RedrawOutcome, RedrawRequest};
pub use crate::error::{PopMapError, Result};
pub use crate::layer::{
    build_layer, LayerOptions, Marker, MarkerStyle, MissingPolicy, RenderedLayer,
};
pub use crate::legend::{Legend, LegendEntry, LEGEND_VALUES};
pub use crate::lookup::{lookup, PopulationLookup};
pub use crate::model::{CityFeature, Dataset, DatasetStats, LatLng, Population, Year};
pub use crate::scale::{radius, SymbolScale, RADIUS_DIVISOR};
pub use crate::timeline::{Direction, Timeline, YearRange, INITIAL_YEAR, STEP};
pub use crate::traits::{MapSurface, NameMatch, NullSurface};

pub mod prelude {
    pub use crate::{
        build_layer, lookup, radius, CityFeature, Dataset, DatasetStats, Direction, LatLng,
        LayerOptions, Legend, LegendEntry, MapConfig, MapController, MapSurface, Marker,
        MarkerStyle, MissingPolicy, NameMatch, NullSurface, PopMapError, Population,
        PopulationLookup, RedrawOutcome, RedrawRequest, RenderedLayer, Result, SymbolScale,
        Timeline, Year, YearRange,
    };
}
