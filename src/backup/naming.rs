// dbbackupd/src/backup/naming.rs
use std::path::{Path, PathBuf};

/// Derives the local dump path for one cycle: `backup_<db>_<epoch_millis>.sql`
/// under the configured backup directory.
///
/// The millisecond timestamp keeps artifact names unique across cycles as
/// long as cycles are spaced more than a millisecond apart, which the
/// interval guarantees. The database name is inserted verbatim; keeping it
/// filesystem-safe is the operator's responsibility.
pub fn dump_file_path(backup_dir: &Path, db_name: &str, epoch_millis: i64) -> PathBuf {
    backup_dir.join(format!("backup_{}_{}.sql", db_name, epoch_millis))
}

/// Returns the object key the artifact will have in the bucket: the file's
/// basename, with the configured prefix prepended verbatim when present.
pub fn remote_key(local_path: &Path, key_prefix: Option<&str>) -> String {
    let basename = local_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match key_prefix {
        Some(prefix) => format!("{}{}", prefix, basename),
        None => basename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_file_path_pattern() {
        let path = dump_file_path(Path::new("./backups"), "orders", 1700000000000);
        assert_eq!(path, PathBuf::from("./backups/backup_orders_1700000000000.sql"));
    }

    #[test]
    fn test_distinct_timestamps_give_distinct_paths() {
        let dir = Path::new("/var/backups");
        let first = dump_file_path(dir, "orders", 1700000000000);
        let second = dump_file_path(dir, "orders", 1700000000001);
        assert_ne!(first, second);
    }

    #[test]
    fn test_remote_key_without_prefix_is_basename() {
        let key = remote_key(Path::new("./backups/backup_orders_1700000000000.sql"), None);
        assert_eq!(key, "backup_orders_1700000000000.sql");
    }

    #[test]
    fn test_remote_key_prepends_prefix_verbatim() {
        let key = remote_key(
            Path::new("/var/backups/backup_orders_1700000000000.sql"),
            Some("nightly/"),
        );
        assert_eq!(key, "nightly/backup_orders_1700000000000.sql");

        // The prefix is used as-is, no separator is inserted.
        let key = remote_key(Path::new("backup_orders_1.sql"), Some("nightly"));
        assert_eq!(key, "nightlybackup_orders_1.sql");
    }
}
