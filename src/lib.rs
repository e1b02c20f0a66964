pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::{JobConfig, RosterConfig};
pub use core::first_names::{find_first_names, FIND_FIRST_NAMES_DOC};
pub use core::job::JobRunner;
pub use core::row_value::calc_row_value;
pub use utils::error::{Result, RowRosterError};
