// crates/popmap-core/src/model.rs
use crate::lookup::{lookup, PopulationLookup};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Calendar year driving the visualization (e.g. 1970).
pub type Year = i32;

/// Number of inhabitants. Never negative.
pub type Population = u64;

/// A WGS84 position. GeoJSON stores it as `[lng, lat]`, this struct names
/// the axes so nobody has to remember the order again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One city on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityFeature {
    pub city: String,
    pub country: String,
    pub point: LatLng,
    /// Recorded populations. Years without a record are simply not keys.
    pub populations: BTreeMap<Year, Population>,
}

impl CityFeature {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// `"City, Country"`, or just the city when the country is unknown.
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }

    /// Population recorded for exactly `year`.
    #[inline]
    pub fn population_in(&self, year: Year) -> PopulationLookup {
        lookup(&self.populations, year)
    }
}

impl NameMatch for CityFeature {
    fn name_str(&self) -> &str {
        &self.city
    }
}

/// The full static collection of cities, in file order.
///
/// Immutable once loaded; a redraw builds a fresh layer from it instead of
/// mutating it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub features: Vec<CityFeature>,
}

/// Simple aggregate statistics for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub features: usize,
    /// Number of distinct years with at least one record.
    pub years: usize,
    pub first_year: Option<Year>,
    pub last_year: Option<Year>,
}

impl Dataset {
    pub fn new(features: Vec<CityFeature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[CityFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Every year that has at least one record, with the number of cities
    /// reporting it.
    pub fn observed_years(&self) -> BTreeMap<Year, usize> {
        let mut years = BTreeMap::new();
        for feature in &self.features {
            for year in feature.populations.keys() {
                *years.entry(*year).or_insert(0) += 1;
            }
        }
        years
    }

    /// Sum of all recorded populations for `year`, saturating at
    /// `Population::MAX`. Cities without a record do not contribute.
    pub fn total_population(&self, year: Year) -> Population {
        self.features
            .iter()
            .filter_map(|f| f.population_in(year).value())
            .fold(0, Population::saturating_add)
    }

    pub fn stats(&self) -> DatasetStats {
        let years = self.observed_years();
        DatasetStats {
            features: self.features.len(),
            years: years.len(),
            first_year: years.keys().next().copied(),
            last_year: years.keys().next_back().copied(),
        }
    }

    /// Accent-insensitive, case-insensitive substring search on city names.
    pub fn find_cities_by_substring(&self, query: &str) -> Vec<&CityFeature> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.features
            .iter()
            .filter(|f| f.name_contains(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(city: &str, country: &str, pops: &[(Year, Population)]) -> CityFeature {
        CityFeature {
            city: city.to_string(),
            country: country.to_string(),
            point: LatLng { lat: 0.0, lng: 0.0 },
            populations: pops.iter().copied().collect(),
        }
    }

    #[test]
    fn stats_cover_all_observed_years() {
        let ds = Dataset::new(vec![
            feature("Tokyo", "Japan", &[(1970, 23_000_000), (1980, 28_000_000)]),
            feature("Lagos", "Nigeria", &[(1980, 2_500_000), (2000, 7_000_000)]),
        ]);
        let stats = ds.stats();
        assert_eq!(stats.features, 2);
        assert_eq!(stats.years, 3);
        assert_eq!(stats.first_year, Some(1970));
        assert_eq!(stats.last_year, Some(2000));
        assert_eq!(ds.observed_years().get(&1980), Some(&2));
    }

    #[test]
    fn empty_dataset_has_no_year_span() {
        let stats = Dataset::default().stats();
        assert_eq!(stats.features, 0);
        assert_eq!(stats.first_year, None);
        assert_eq!(stats.last_year, None);
    }

    #[test]
    fn total_population_skips_missing_records() {
        let ds = Dataset::new(vec![
            feature("A", "X", &[(1970, 100)]),
            feature("B", "X", &[(1980, 50)]),
            feature("C", "X", &[(1970, 25)]),
        ]);
        assert_eq!(ds.total_population(1970), 125);
        assert_eq!(ds.total_population(1990), 0);
    }

    #[test]
    fn total_population_saturates_instead_of_overflowing() {
        let ds = Dataset::new(vec![
            feature("A", "X", &[(1970, 18_000_000_000_000_000_000)]),
            feature("B", "X", &[(1970, 18_000_000_000_000_000_000)]),
        ]);
        assert_eq!(ds.total_population(1970), Population::MAX);
    }

    #[test]
    fn city_search_folds_accents_and_case() {
        let ds = Dataset::new(vec![
            feature("São Paulo", "Brazil", &[]),
            feature("Mexico City", "Mexico", &[]),
        ]);
        let hits = ds.find_cities_by_substring("sao");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].city(), "São Paulo");
        assert!(ds.find_cities_by_substring("  ").is_empty());
    }

    #[test]
    fn display_name_without_country() {
        assert_eq!(feature("Nowhere", "", &[]).display_name(), "Nowhere");
        assert_eq!(feature("Cairo", "Egypt", &[]).display_name(), "Cairo, Egypt");
    }
}
