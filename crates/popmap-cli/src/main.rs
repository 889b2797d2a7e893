//! popmap — Command-line interface for popmap-core
//!
//! This binary loads a city population dataset and shows what the map would
//! display: dataset statistics, the marker layer for a year, a city's
//! population series, the legend, or a walk along the year slider.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ popmap stats
//!
//! - Print the layer for 1990 (cities without data labelled instead of omitted)
//!   $ popmap layer --year 1990 --missing label
//!
//! - Search a city
//!   $ popmap city "sao paulo"
//!
//! - Click "next decade" five times
//!   $ popmap timeline --steps 5
//!
//! Data source
//! -----------
//!
//! Without `--input` the CLI uses the `dataset` of the `--config` file, or
//! the sample dataset bundled with `popmap-core` when no config is given.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use popmap_cli::{
    load_dataset, resolve_input_path, write_layer_table, write_legend, TerminalSurface,
};
use popmap_core::text::group_thousands;
use popmap_core::{Direction, MapConfig, MapController, NullSurface};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let loaded = match &args.config {
        Some(path) => Some(
            MapConfig::load_from_path(path).with_context(|| format!("loading config {path}"))?,
        ),
        None => None,
    };
    let input_path = resolve_input_path(args.input.as_deref(), loaded.as_ref());
    let mut config = loaded.unwrap_or_default();
    let dataset = load_dataset(&input_path)
        .with_context(|| format!("loading dataset {}", input_path.display()))?;

    match args.command {
        Commands::Stats => {
            let stats = dataset.stats();
            println!("Dataset statistics:");
            println!("  Cities: {}", stats.features);
            println!("  Years with data: {}", stats.years);
            match (stats.first_year, stats.last_year) {
                (Some(first), Some(last)) => println!("  Span: {first}-{last}"),
                _ => println!("  Span: none"),
            }
        }

        Commands::Years => {
            for (year, cities) in dataset.observed_years() {
                println!(
                    "{year}: {cities} cities, {} people",
                    group_thousands(dataset.total_population(year))
                );
            }
        }

        Commands::Layer {
            year,
            missing,
            json,
        } => {
            if let Some(missing) = missing {
                config.missing = missing.into();
            }
            let mut map = MapController::new(&config, NullSurface)?;
            if let Some(year) = year {
                map.select_year(year);
            }
            map.redraw_with(&dataset);
            let layer = map.layer().context("no layer was attached")?;
            if json {
                println!("{}", serde_json::to_string_pretty(layer)?);
            } else {
                write_layer_table(&mut std::io::stdout(), layer)?;
                if layer.omitted > 0 {
                    println!("  ({} cities without data omitted)", layer.omitted);
                }
            }
        }

        Commands::City { query } => {
            let matches = dataset.find_cities_by_substring(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            }
            for city in matches {
                println!("{}", city.display_name());
                for (year, population) in &city.populations {
                    println!("  {year}: {}", group_thousands(*population));
                }
            }
        }

        Commands::Legend { json } => {
            let map = MapController::new(&config, NullSurface)?;
            if json {
                println!("{}", serde_json::to_string_pretty(map.legend())?);
            } else {
                write_legend(&mut std::io::stdout(), map.legend())?;
            }
        }

        Commands::Timeline { steps, back } => {
            let direction = if back {
                Direction::Back
            } else {
                Direction::Forward
            };
            let mut map = MapController::new(&config, TerminalSurface::stdout())?;
            let request = map.start();
            map.complete_with(request, &dataset);

            println!("Clicking \"{}\" {steps} times", direction.title());
            for _ in 0..steps {
                match map.step_towards(direction) {
                    Some(request) => {
                        map.complete_with(request, &dataset);
                    }
                    None => println!("  {} is the slider bound, no change", map.current_year()),
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
