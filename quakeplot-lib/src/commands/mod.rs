//! Command-line interface and orchestration for quakeplot
//!
//! This module implements the CLI commands and wires the catalog, analysis, and
//! report modules into the end-to-end pipeline.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **plot** (the default when no subcommand is given): fetch the event catalog,
//!   group magnitudes by year, write the two PNG charts, and optionally print or
//!   export the per-year summary
//! - **init**: generate a default configuration file
//! - **validate**: load a configuration file and check its values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! matching handler. The plot handler:
//!
//! 1. Initializes logging and loads the configuration
//! 2. Fetches the fixed event query through the catalog provider, showing a spinner
//! 3. Groups the records into per-year magnitude lists
//! 4. Renders the count and average charts into the output directory
//! 5. Writes any requested summary reports
//!
//! All output goes through the [`Host`] trait so tests can capture it.

mod common;
mod config;
mod host;
mod init;
mod plot;
mod progress_reporter;
mod run;
mod validate;

pub use common::{ColorMode, LogLevel, init_logging};
pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TOML};
pub use host::Host;
#[cfg(test)]
pub use host::TestHost;
pub use init::{InitArgs, init_config};
pub use plot::{AVERAGE_CHART_FILE, COUNT_CHART_FILE, PlotArgs, process_plot};
pub use progress_reporter::ProgressReporter;
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
