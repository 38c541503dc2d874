mod api;
mod catalog;
mod commands;
mod config;
mod courses;
mod directories;
mod error;
mod network;
mod products;
mod storage;
mod tutors;

use crate::{
    api::Api,
    config::{Config, RawConfig},
    directories::Directories,
    error::Error as FretboardError,
    network::Network,
    storage::{FileStorage, MemoryStorage},
};
use anyhow::anyhow;
use clap::ArgMatches;
use std::{env, process::ExitCode};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let filter = log_filter(env::var(EnvFilter::DEFAULT_ENV).ok());
    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let matches = commands::build_cli().get_matches();
    match run(&matches) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let err = FretboardError::from(err);
            debug!(error.kind = ?err.kind(), "Command failed.");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Builds log filter from the `RUST_LOG` directives, only errors are logged if there are none.
fn log_filter(directives: Option<String>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    debug!("Fretboard raw configuration: {raw_config:?}.");

    let config = Config::from(raw_config);
    debug!(version = %config.version, "Running Fretboard.");
    let network = Network::create(&config.http.client)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if matches.get_flag("EPHEMERAL") {
        let api = Api::new(config, MemoryStorage::new(), network)?;
        return runtime.block_on(commands::execute(&api, matches));
    }

    let data_dir = match &config.storage.path {
        Some(path) => path.clone(),
        None => Directories::ensure_data_dir_exists()?,
    };
    let storage = FileStorage::open(data_dir)?;
    debug!(storage.root = ?storage.root(), "Using file storage.");

    let api = Api::new(config, storage, network)?;
    runtime.block_on(commands::execute(&api, matches))
}
