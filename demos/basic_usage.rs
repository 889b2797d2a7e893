//! Basic usage example for popmap-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city population dataset
//! - Look up a city's population for a year
//! - Build the marker layer for the selected year
//! - Move the year slider and redraw

use popmap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== popmap-rs Basic Usage Example ===\n");

    println!("Loading dataset...");
    let dataset = Dataset::load_default()?;
    let stats = dataset.stats();
    println!(
        "✓ {} cities, {} years with data\n",
        stats.features, stats.years
    );

    // Example 1: Population lookup
    println!("--- Example 1: Population of Lagos per decade ---");
    if let Some(lagos) = dataset.find_cities_by_substring("lagos").first() {
        for year in [1950, 1975, 2000, 2020] {
            match lagos.population_in(year) {
                PopulationLookup::Present(n) => println!("  {year}: {n} (radius {:.2})", radius(n)),
                PopulationLookup::Absent => println!("  {year}: no record"),
            }
        }
    }
    println!();

    // Example 2: Marker layer for the initial year
    println!("--- Example 2: Layer for the initial year ---");
    let mut map = MapController::new(&MapConfig::default(), NullSurface)?;
    map.redraw_with(&dataset);
    if let Some(layer) = map.layer() {
        println!("Year {}: {} markers, {} omitted", layer.year, layer.len(), layer.omitted);
        for marker in layer.markers().iter().take(3) {
            println!("  {} r={:.2}", marker.city, marker.radius);
        }
    }
    println!();

    // Example 3: Arrow clicks
    println!("--- Example 3: Next decade, three times ---");
    for _ in 0..3 {
        if map.step_forward().is_some() {
            map.redraw_with(&dataset);
            if let Some(layer) = map.layer() {
                println!("  {}: {} markers", layer.year, layer.len());
            }
        }
    }

    Ok(())
}
