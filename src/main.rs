//! Periodic MySQL Backup Daemon
//!
//! Dumps the configured database on a fixed interval, uploads each dump to
//! S3-compatible object storage and removes the local copy once the upload
//! is confirmed.

// dbbackupd/src/main.rs
mod backup;
mod config;
mod errors;
mod scheduler;
mod utils;

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use config::DaemonConfig;

const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Main entry point for the backup daemon
#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run_daemon().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_daemon() -> Result<()> {
    // Config path defaults to config.json next to the working directory,
    // overridable through the environment.
    let config_path = env::var("DBBACKUPD_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    let app_config = DaemonConfig::load(&config_path).with_context(|| {
        format!(
            "Config file at {} is missing or not valid; no backups will be performed",
            config_path.display()
        )
    })?;

    let dump_command = backup::db_dump::find_dump_executable(
        app_config
            .dump_command
            .as_deref()
            .unwrap_or(backup::db_dump::DEFAULT_DUMP_COMMAND),
    )?;

    std::fs::create_dir_all(&app_config.local_backup_dir).with_context(|| {
        format!(
            "Failed to create local backup directory: {}",
            app_config.local_backup_dir.display()
        )
    })?;

    utils::setting::check_db_connection(&app_config.database).await;

    scheduler::run(&app_config, &dump_command).await;
    Ok(())
}
