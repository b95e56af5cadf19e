// dbbackupd/src/backup/db_dump.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use which::which;

use crate::config::DatabaseConfig;

pub const DEFAULT_DUMP_COMMAND: &str = "mysqldump";

/// Resolves the dump executable in PATH once at startup.
pub fn find_dump_executable(command: &str) -> Result<PathBuf> {
    which(command).with_context(|| {
        format!(
            "{} executable not found in PATH. Please ensure the MySQL client tools are installed and in your PATH.",
            command
        )
    })
}

/// Runs the dump tool against the configured database, writing the child's
/// stdout directly to `destination`.
///
/// The invocation is `<cmd> --hex-blob -h <host> -P <port> -u <user>
/// -p<password> <db>` with structured arguments; the password travels as a
/// single argv entry and never passes through a shell. Exit code 0 succeeds.
/// A status without an exit code (the child died to a signal) is not treated
/// as a failure. Any other code fails with the captured stderr; a partially
/// written destination file is left in place for the caller to deal with.
pub async fn dump_database(
    dump_command: &Path,
    db: &DatabaseConfig,
    destination: &Path,
) -> Result<()> {
    let dump_file = std::fs::File::create(destination)
        .with_context(|| format!("Failed to create dump file: {}", destination.display()))?;

    let child = Command::new(dump_command)
        .arg("--hex-blob")
        .arg("-h")
        .arg(&db.host)
        .arg("-P")
        .arg(db.port.to_string())
        .arg("-u")
        .arg(&db.user)
        .arg(format!("-p{}", db.password))
        .arg(&db.name)
        .stdin(Stdio::null())
        .stdout(Stdio::from(dump_file))
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| {
            format!(
                "Failed to execute {} for database {}",
                dump_command.display(),
                db.name
            )
        })?;

    let output = child.wait_with_output().await.with_context(|| {
        format!(
            "Failed to collect {} status for database {}",
            dump_command.display(),
            db.name
        )
    })?;

    match output.status.code() {
        Some(0) | None => Ok(()),
        Some(code) => Err(anyhow::anyhow!(
            "{} for database {} failed with exit code {}\nStderr: {}",
            dump_command.display(),
            db.name,
            code,
            String::from_utf8_lossy(&output.stderr)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> DatabaseConfig {
        DatabaseConfig {
            host: "localhost".to_string(),
            port: 3306,
            user: "backup".to_string(),
            password: "hunter2".to_string(),
            name: "orders".to_string(),
        }
    }

    #[test]
    fn test_find_dump_executable_missing_command() {
        assert!(find_dump_executable("definitely-not-a-dump-tool").is_err());
    }

    #[tokio::test]
    async fn test_dump_succeeds_on_zero_exit() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let destination = dir.path().join("backup_orders_1.sql");

        // `true` ignores the dump arguments and exits 0, standing in for a
        // dump tool that succeeded.
        let command = find_dump_executable("true")?;
        dump_database(&command, &test_db(), &destination).await?;

        assert!(destination.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_dump_fails_on_nonzero_exit() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let destination = dir.path().join("backup_orders_2.sql");

        let command = find_dump_executable("false")?;
        let result = dump_database(&command, &test_db(), &destination).await;

        assert!(result.is_err());
        // The partially written artifact stays on disk.
        assert!(destination.exists());
        Ok(())
    }
}
