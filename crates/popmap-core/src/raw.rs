// crates/popmap-core/src/raw.rs
use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Raw GeoJSON document, as it comes from the dataset file.
///
/// Only the members the map uses are read; anything else in the document
/// (`bbox`, `crs`, foreign members) is ignored.
#[derive(Debug, Deserialize)]
pub struct FeatureCollectionRaw {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<FeatureRaw>,
}

/// Raw feature. Geometry and properties may be `null` in valid GeoJSON, the
/// converter decides whether that is acceptable.
#[derive(Debug, Deserialize)]
pub struct FeatureRaw {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub geometry: Option<GeometryRaw>,
    #[serde(default)]
    pub properties: Option<PropertiesRaw>,
}

/// Raw geometry:
/// {
///   "type": "Point",
///   "coordinates": [139.6917, 35.6895]
/// }
#[derive(Debug, Deserialize)]
pub struct GeometryRaw {
    #[serde(rename = "type")]
    pub kind: String,
    /// Kept untyped: its shape depends on `kind`.
    #[serde(default)]
    pub coordinates: Value,
}

/// Raw city properties.
/// populations: { "1970": 8000000, "1980": 9000000, "1990": null }
#[derive(Debug, Deserialize)]
pub struct PropertiesRaw {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub populations: BTreeMap<String, Option<Number>>,
}
