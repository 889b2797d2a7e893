// crates/popmap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! GeoJSON converter. Every entry point returns a fully validated
//! [`Dataset`] or an error; there is no partial load.

use crate::convert;
use crate::error::Result;
use crate::model::Dataset;
use crate::raw::FeatureCollectionRaw;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

mod common_io;

impl Dataset {
    /// Directory holding the bundled sample dataset.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.geojson"
    }

    /// Loads the sample dataset shipped in [`Dataset::default_data_dir`].
    pub fn load_default() -> Result<Self> {
        Self::load_from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// **Standard Loader:** reads a `.geojson` file, or a gzip-compressed
    /// `.geojson.gz` when the `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let dataset = Self::from_reader(reader).inspect_err(|e| {
            error!(path = %path.display(), "failed to load dataset: {e}");
        })?;
        debug!(path = %path.display(), features = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: FeatureCollectionRaw = serde_json::from_reader(reader)?;
        convert::from_raw(raw)
    }

    /// Parses a GeoJSON document already held in memory (e.g. a fetched body).
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: FeatureCollectionRaw = serde_json::from_str(text)?;
        convert::from_raw(raw)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: FeatureCollectionRaw = serde_json::from_slice(bytes)?;
        convert::from_raw(raw)
    }
}
