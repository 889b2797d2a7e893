use clap::{Parser, Subcommand, ValueEnum};
use popmap_core::{MissingPolicy, Year};

/// CLI arguments for popmap
#[derive(Debug, Parser)]
#[command(
    name = "popmap",
    version,
    about = "CLI for inspecting year-by-year city population maps"
)]
pub struct CliArgs {
    /// Path to the GeoJSON dataset (.geojson or .geojson.gz). Overrides the config file.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Path to a JSON map configuration (year bounds, step, scaling, style)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List every year with at least one record
    Years,

    /// Print the marker layer for a year
    Layer {
        /// Year to render (clamped to the configured slider bounds)
        #[arg(short, long)]
        year: Option<Year>,

        /// What to do with cities that have no record for the year
        #[arg(short, long, value_enum)]
        missing: Option<MissingArg>,

        /// Emit the layer as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search cities by name and print their population series
    City {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },

    /// Print the legend swatches
    Legend {
        #[arg(long)]
        json: bool,
    },

    /// Walk the year slider one step at a time from the initial year
    Timeline {
        /// Number of arrow clicks to simulate
        #[arg(short, long, default_value_t = 10)]
        steps: usize,

        /// Click the "previous decade" arrow instead of "next decade"
        #[arg(long)]
        back: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MissingArg {
    Omit,
    Label,
}

impl From<MissingArg> for MissingPolicy {
    fn from(value: MissingArg) -> Self {
        match value {
            MissingArg::Omit => MissingPolicy::Omit,
            MissingArg::Label => MissingPolicy::LabelNoData,
        }
    }
}
