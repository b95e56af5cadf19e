// dbbackupd/src/scheduler/mod.rs
use std::path::Path;
use tracing::{error, info};

use crate::backup;
use crate::config::DaemonConfig;

/// The daemon loop: runs one backup cycle, then waits the configured
/// interval before the next, for the lifetime of the process.
///
/// The wait starts only after the current cycle's outcome is known, so at
/// most one dump/upload pair is ever in flight and "interval" means
/// time-after-completion rather than a fixed-rate clock. A failed cycle is
/// logged and the loop reschedules unconditionally; nothing short of a
/// shutdown signal stops it. There is no timeout on a cycle; a hung dump
/// or upload stalls the loop until it resolves.
pub async fn run(config: &DaemonConfig, dump_command: &Path) {
    info!(
        interval_secs = config.interval.as_secs_f64(),
        "🚀 Starting backup daemon"
    );

    let mut shutdown_rx = spawn_shutdown_listener();

    loop {
        info!("Performing database backup for {}", config.database.name);
        match backup::run_backup_cycle(config, dump_command).await {
            Ok(()) => info!("✅ Successfully performed database backup"),
            Err(e) => error!("❌ {}", e),
        }

        tokio::select! {
            _ = tokio::time::sleep(config.interval) => {}
            _ = shutdown_rx.changed() => {
                info!("Shutdown signal received, stopping backup daemon");
                break;
            }
        }
    }
}

/// Watches for Ctrl-C on a background task. An in-flight cycle always runs
/// to completion; the signal only takes effect between cycles.
fn spawn_shutdown_listener() -> tokio::sync::watch::Receiver<bool> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });
    shutdown_rx
}
