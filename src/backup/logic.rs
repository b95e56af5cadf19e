// dbbackupd/src/backup/logic.rs
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

use crate::backup::{archive, db_dump, naming, s3_upload};
use crate::config::DaemonConfig;
use crate::errors::CycleError;

/// Runs one full backup cycle: dump, optional compression, upload, local
/// cleanup.
///
/// Stages run strictly in sequence; each one completes before the next
/// begins and a failure short-circuits the rest of the cycle. The local
/// artifact is deleted only after the upload is confirmed; on a dump or
/// upload failure it stays on disk for manual recovery. Nothing is carried
/// over between cycles.
pub async fn run_backup_cycle(config: &DaemonConfig, dump_command: &Path) -> Result<(), CycleError> {
    let dump_path = naming::dump_file_path(
        &config.local_backup_dir,
        &config.database.name,
        Utc::now().timestamp_millis(),
    );

    db_dump::dump_database(dump_command, &config.database, &dump_path)
        .await
        .map_err(CycleError::Dump)?;

    let artifact_path = if config.compress {
        archive::compress_dump_file(&dump_path).map_err(CycleError::Dump)?
    } else {
        dump_path
    };

    let s3_key = naming::remote_key(&artifact_path, config.storage.key_prefix.as_deref());
    s3_upload::upload_file_to_s3(&config.storage, &artifact_path, &s3_key)
        .await
        .map_err(CycleError::Upload)?;

    remove_artifact(&artifact_path);
    Ok(())
}

/// Deletes the uploaded artifact. The file was written by this same process
/// moments earlier, so a failure here is only surfaced as a warning and does
/// not reverse the success already decided by the upload.
fn remove_artifact(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => info!("Removed local artifact {}", path.display()),
        Err(e) => warn!("Failed to remove local artifact {}: {}", path.display(), e),
    }
}
