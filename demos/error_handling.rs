//! Error handling example for popmap-rs
//!
//! This example demonstrates how malformed input, missing files and stale
//! fetch results are reported.

use popmap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== popmap-rs Error Handling Example ===\n");

    // Example 1: Missing dataset file
    println!("--- Example 1: Loading a file that does not exist ---");
    match Dataset::load_from_path("does-not-exist.geojson") {
        Ok(_) => println!("✓ unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Malformed documents
    println!("--- Example 2: Malformed GeoJSON ---");
    let documents = [
        r#"{"type":"FeatureCollection","features":[{"type":"Feature"}]}"#,
        r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{"city":"X","populations":{"nineteen-seventy":1}}}]}"#,
        r#"{"type":"FeatureCollection""#,
    ];
    for doc in documents {
        match Dataset::from_json_str(doc) {
            Ok(ds) => println!("  loaded {} cities", ds.len()),
            Err(e) => println!("  rejected: {e}"),
        }
    }
    println!();

    // Example 3: Failed and stale fetches
    println!("--- Example 3: Fetch results arriving late or failing ---");
    let dataset = Dataset::load_default()?;
    let mut map = MapController::new(&MapConfig::default(), NullSurface)?;
    let first = map.start();
    let second = map.step_forward().expect("1980 is inside the slider range");

    println!("  second: {:?}", map.complete(second, Ok(dataset.clone())));
    println!("  first:  {:?}", map.complete(first, Ok(dataset)));
    let third = map.step_forward().expect("1990 is inside the slider range");
    println!(
        "  third:  {:?}",
        map.complete(third, Err(PopMapError::Fetch("503 Service Unavailable".into())))
    );
    println!("  still showing {:?}", map.layer().map(|l| l.year));

    Ok(())
}
