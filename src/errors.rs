// dbbackupd/src/errors.rs
use thiserror::Error;

/// Failure of a single backup cycle, classified by the stage that failed.
///
/// Either variant ends the current cycle only; the daemon keeps running and
/// the local artifact, when one was produced, stays on disk for manual
/// inspection or retry.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("database dump failed: {0:#}")]
    Dump(anyhow::Error),

    #[error("artifact upload failed: {0:#}")]
    Upload(anyhow::Error),
}
