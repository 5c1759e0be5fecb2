use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for foodframe
#[derive(Debug, Parser)]
#[command(
    name = "foodframe",
    version,
    about = "Terminal host for the foodframe city food recommendation widget"
)]
pub struct CliArgs {
    /// Path to a JSON frame configuration (storage key, map base URL, detection rule)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Path of the JSON key-value file standing in for browser storage
    #[arg(short = 's', long = "storage", global = true)]
    pub storage: Option<PathBuf>,

    /// Run without a storage context (nothing is read or persisted)
    #[arg(long = "no-storage", global = true, conflicts_with = "storage")]
    pub no_storage: bool,

    /// Username reported by the simulated host context
    #[arg(short = 'u', long = "username", global = true)]
    pub username: Option<String>,

    /// Print frame views as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Activate the frame and show the card (persisted city, detection)
    Show,

    /// Type a city and request recommendations for it (persists the city)
    Recommend {
        /// City name (case-insensitive lookup, stored as typed)
        city: String,
    },

    /// List the cities that have their own recommendations
    Cities,

    /// Print the map search URL for the first recommendation of a city
    Map {
        /// City name
        city: String,
    },

    /// Drive the frame line by line from stdin
    Interactive,
}
