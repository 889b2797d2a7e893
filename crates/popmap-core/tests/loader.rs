use popmap_core::{Dataset, PopMapError, PopulationLookup};
use std::fs;

#[test]
fn bundled_dataset_loads() {
    let dataset = Dataset::load_default().expect("bundled dataset");
    let stats = dataset.stats();
    assert_eq!(stats.features, 10);
    assert_eq!(stats.first_year, Some(1950));
    assert_eq!(stats.last_year, Some(2020));

    // Shenzhen has no record before 1980, Abuja's 1990 entry is null.
    let years = dataset.observed_years();
    assert_eq!(years.get(&1970), Some(&8));
    assert_eq!(years.get(&1990), Some(&9));

    let hits = dataset.find_cities_by_substring("sao paulo");
    assert_eq!(hits.len(), 1);
    assert!(hits[0].population_in(1970).is_present());
    assert_eq!(hits[0].population_in(1975), PopulationLookup::Absent);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load_from_path(dir.path().join("absent.geojson")).unwrap_err();
    assert!(matches!(err, PopMapError::NotFound(_)));
}

#[test]
fn syntax_error_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.geojson");
    fs::write(&path, "{\"type\": \"FeatureCollection\", ").unwrap();
    assert!(matches!(
        Dataset::load_from_path(&path),
        Err(PopMapError::Json(_))
    ));
}

#[test]
fn reads_from_bytes() {
    let dataset = Dataset::from_slice(br#"{"type":"FeatureCollection","features":[]}"#).unwrap();
    assert!(dataset.is_empty());
}

#[cfg(feature = "compact")]
#[test]
fn reads_gzip_compressed_dataset() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let source = fs::read(Dataset::default_data_dir().join(Dataset::default_dataset_filename()))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.geojson.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(&source).unwrap();
    encoder.finish().unwrap();

    let plain = Dataset::from_slice(&source).unwrap();
    let packed = Dataset::load_from_path(&path).unwrap();
    assert_eq!(plain, packed);
}
