pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "row-roster")]
#[command(about = "Scores digit rows and extracts sorted first names from rosters")]
pub struct CliConfig {
    #[arg(long = "row", allow_hyphen_values = true, help = "Digit row to score (repeatable)")]
    pub rows: Vec<String>,

    #[arg(
        long = "names",
        value_delimiter = ',',
        help = "Comma-separated full names; all occurrences form one roster"
    )]
    pub names: Vec<String>,

    #[arg(long, help = "TOML job file with rows and rosters")]
    pub config: Option<String>,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
