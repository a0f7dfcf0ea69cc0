//! CLI argument definitions using clap
//!
//! Commands:
//! - vehicledb serve [--config <path>] [--data <path>] [--port <n>]
//! - vehicledb inspect --data <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vehicledb - read-only HTTP query service over a vehicle catalogue
#[derive(Parser, Debug)]
#[command(name = "vehicledb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the vehicle data and serve the HTTP API
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Vehicle data file (overrides the config file)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Port to listen on (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load a vehicle data file and print a summary
    Inspect {
        /// Vehicle data file
        #[arg(long)]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
