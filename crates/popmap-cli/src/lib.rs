//! popmap-cli
//! ==========
//!
//! Command-line interface for `popmap-core` city population maps.
//!
//! The binary (`popmap`) drives the same [`MapController`] a browser map
//! uses, with [`TerminalSurface`] standing in for the map library: year
//! changes and layer swaps are printed instead of drawn.
//!
//! Basic usage:
//!
//! ```text
//! popmap --help
//! popmap stats
//! popmap layer --year 1990
//! popmap --input cities.geojson.gz layer --year 2000 --missing label --json
//! popmap timeline --steps 5
//! ```
//!
//! [`MapController`]: popmap_core::MapController
#![cfg_attr(docsrs, feature(doc_cfg))]

use popmap_core::text::group_thousands;
use popmap_core::{
    Dataset, Legend, MapConfig, MapSurface, PopMapError, PopulationLookup, RenderedLayer, Year,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Dataset path: `--input` first, then the config's `dataset`, then the
/// sample bundled with `popmap-core`.
pub fn resolve_input_path(input: Option<&str>, config: Option<&MapConfig>) -> PathBuf {
    let path = match (input, config) {
        (Some(input), _) => PathBuf::from(input),
        (None, Some(config)) => PathBuf::from(&config.dataset),
        (None, None) => Dataset::default_data_dir().join(Dataset::default_dataset_filename()),
    };
    debug!(path = %path.display(), "resolved dataset path");
    path
}

pub fn load_dataset(path: &Path) -> popmap_core::Result<Dataset> {
    let dataset = Dataset::load_from_path(path)?;
    info!(
        path = %path.display(),
        features = dataset.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// A [`MapSurface`] that narrates what a map would show.
///
/// Output is best-effort: a closed pipe must not abort a redraw.
pub struct TerminalSurface<W: Write> {
    out: W,
    /// Print every marker on layer swaps, not just the count.
    pub verbose_layers: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            verbose_layers: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> MapSurface for TerminalSurface<W> {
    fn show_year(&mut self, year: Year) {
        let _ = writeln!(self.out, "Year: {year}");
    }

    fn replace_layer(&mut self, layer: &RenderedLayer) {
        let _ = writeln!(
            self.out,
            "  {} markers, {} cities without data",
            layer.len(),
            layer.omitted
        );
        if self.verbose_layers {
            let _ = write_layer_table(&mut self.out, layer);
        }
    }

    fn show_legend(&mut self, legend: &Legend) {
        let _ = write_legend(&mut self.out, legend);
    }

    fn report_error(&mut self, error: &PopMapError) {
        let _ = writeln!(self.out, "  error updating map: {error}");
    }
}

/// One row per marker: city, country, population, radius.
pub fn write_layer_table<W: Write>(out: &mut W, layer: &RenderedLayer) -> std::io::Result<()> {
    writeln!(out, "Population ({}):", layer.year)?;
    for m in layer.markers() {
        let population = match m.population {
            PopulationLookup::Present(n) => group_thousands(n),
            PopulationLookup::Absent => popmap_core::layer::NO_DATA.to_string(),
        };
        writeln!(
            out,
            "  {:<20} {:<16} {:>12}  r={:.3}",
            m.city, m.country, population, m.radius
        )?;
    }
    Ok(())
}

pub fn write_legend<W: Write>(out: &mut W, legend: &Legend) -> std::io::Result<()> {
    writeln!(out, "{}", legend.title)?;
    for e in legend.entries() {
        writeln!(out, "  {:>4}  diameter {:.3}px", e.label, e.diameter())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use popmap_core::{CityFeature, Dataset, LatLng, MapConfig, MapController};

    fn dataset() -> Dataset {
        Dataset::new(vec![CityFeature {
            city: "Cairo".into(),
            country: "Egypt".into(),
            point: LatLng { lat: 30.04, lng: 31.24 },
            populations: [(1970, 5_585_000)].into_iter().collect(),
        }])
    }

    #[test]
    fn input_flag_wins_over_config() {
        let config = MapConfig {
            dataset: "from-config.geojson".into(),
            ..MapConfig::default()
        };
        assert_eq!(
            resolve_input_path(Some("cli.geojson"), Some(&config)),
            PathBuf::from("cli.geojson")
        );
        assert_eq!(
            resolve_input_path(None, Some(&config)),
            PathBuf::from("from-config.geojson")
        );
    }

    #[test]
    fn falls_back_to_bundled_sample() {
        let path = resolve_input_path(None, None);
        assert!(path.ends_with(Dataset::default_dataset_filename()));
        let dataset = load_dataset(&path).unwrap();
        assert!(!dataset.is_empty());
    }

    #[test]
    fn missing_dataset_is_reported() {
        let err = load_dataset(Path::new("/definitely/not/here.geojson")).unwrap_err();
        assert!(matches!(err, PopMapError::NotFound(_)), "{err}");
    }

    #[test]
    fn narrates_controller_events() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.verbose_layers = true;
        let mut map = MapController::new(&MapConfig::default(), surface).unwrap();
        let req = map.start();
        map.complete_with(req, &dataset());
        map.step_forward();

        let text = String::from_utf8(map.surface_mut().out.clone()).unwrap();
        assert!(text.starts_with("Population (millions)"));
        assert!(text.contains("Year: 1970"));
        assert!(text.contains("1 markers, 0 cities without data"));
        assert!(text.contains("5,585,000"));
        assert!(text.contains("Year: 1980"));
    }

    #[test]
    fn legend_lists_all_swatches() {
        let mut out = Vec::new();
        write_legend(&mut out, &Legend::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        for label in ["1M", "5M", "10M", "20M"] {
            assert!(text.contains(label));
        }
        assert!(text.contains("diameter 4.000px"));
    }
}
