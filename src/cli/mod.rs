//! CLI module for vehicledb
//!
//! - serve: load the data file and run the HTTP API
//! - inspect: load the data file and print a summary

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{inspect, run, run_command, serve, summarize, DataSummary};
pub use errors::{CliError, CliErrorCode, CliResult};
