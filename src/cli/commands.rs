//! CLI command implementations
//!
//! `serve` boots in a fixed order: resolve config, load the data file,
//! build store → service → router, then block on the server. Any failure
//! before the listener is bound aborts start-up.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use super::args::Command;
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{Event, Logger};
use crate::service::{DefaultVehicleService, VehicleService};
use crate::store::{VehicleLoader, VehicleMapStore};
use crate::vehicle::Vehicle;

/// Summary printed by `inspect`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSummary {
    pub total: usize,
    /// Vehicle count per brand, ordered by brand
    pub brands: BTreeMap<String, usize>,
}

/// Parse CLI args and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, data, port } => {
            let config = resolve_config(config.as_deref(), data, port)?;
            serve(config)
        }
        Command::Inspect { data } => inspect(&data),
    }
}

/// Merge the optional config file with command-line overrides
fn resolve_config(
    config_path: Option<&Path>,
    data: Option<PathBuf>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    Ok(config)
}

fn load_data(path: &Path) -> CliResult<HashMap<i64, Vehicle>> {
    let path_str = path.display().to_string();
    match VehicleLoader::load(path) {
        Ok(db) => {
            let count = db.len().to_string();
            Logger::event(
                Event::DataLoaded,
                &[("path", path_str.as_str()), ("vehicles", count.as_str())],
            );
            Ok(db)
        }
        Err(e) => {
            let err = e.to_string();
            Logger::event(
                Event::DataLoadFailed,
                &[("error", err.as_str()), ("path", path_str.as_str())],
            );
            Err(e.into())
        }
    }
}

/// Load the data file and serve the HTTP API until Ctrl-C
pub fn serve(config: ServerConfig) -> CliResult<()> {
    let addr = config.socket_addr();
    let data_path = config.data_path.display().to_string();
    Logger::event(
        Event::ConfigLoaded,
        &[("addr", addr.as_str()), ("data_path", data_path.as_str())],
    );

    let db = load_data(&config.data_path)?;
    let store = VehicleMapStore::new(db);
    let vehicle_count = store.len();
    let service: Arc<dyn VehicleService> = Arc::new(DefaultVehicleService::new(Arc::new(store)));

    let server = HttpServer::new(config, service, vehicle_count);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Count vehicles overall and per brand
pub fn summarize(db: &HashMap<i64, Vehicle>) -> DataSummary {
    let mut brands = BTreeMap::new();
    for vehicle in db.values() {
        *brands.entry(vehicle.attributes.brand.clone()).or_insert(0) += 1;
    }

    DataSummary {
        total: db.len(),
        brands,
    }
}

/// Load a data file and print its summary as JSON
pub fn inspect(data_path: &Path) -> CliResult<()> {
    let db = VehicleLoader::load(data_path)?;
    let summary = summarize(&db);

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &summary)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
