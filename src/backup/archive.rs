// dbbackupd/src/backup/archive.rs
use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Gzips a dump file in place: `backup_db_<ts>.sql` becomes
/// `backup_db_<ts>.sql.gz` and the raw file is removed.
///
/// # Returns
/// Path to the compressed file.
pub fn compress_dump_file(dump_path: &Path) -> Result<PathBuf> {
    let mut gz_name = dump_path.as_os_str().to_owned();
    gz_name.push(".gz");
    let gz_path = PathBuf::from(gz_name);

    let mut input = File::open(dump_path)
        .with_context(|| format!("Failed to open dump file: {}", dump_path.display()))?;
    let gz_file = File::create(&gz_path)
        .with_context(|| format!("Failed to create archive file: {}", gz_path.display()))?;

    let mut encoder = GzEncoder::new(gz_file, Compression::default());
    io::copy(&mut input, &mut encoder)
        .with_context(|| format!("Failed to compress {}", dump_path.display()))?;
    encoder.finish().with_context(|| {
        format!(
            "Failed to finish Gzip encoding for archive: {}",
            gz_path.display()
        )
    })?;

    std::fs::remove_file(dump_path).with_context(|| {
        format!(
            "Failed to remove raw dump file after compression: {}",
            dump_path.display()
        )
    })?;

    Ok(gz_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_compress_replaces_raw_dump() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let dump_path = dir.path().join("backup_orders_1700000000000.sql");
        std::fs::write(&dump_path, b"INSERT INTO orders VALUES (1);\n")?;

        let gz_path = compress_dump_file(&dump_path)?;

        assert_eq!(
            gz_path,
            dir.path().join("backup_orders_1700000000000.sql.gz")
        );
        assert!(gz_path.exists());
        assert!(!dump_path.exists());

        let mut decoder = GzDecoder::new(File::open(&gz_path)?);
        let mut restored = String::new();
        decoder.read_to_string(&mut restored)?;
        assert_eq!(restored, "INSERT INTO orders VALUES (1);\n");
        Ok(())
    }

    #[test]
    fn test_compress_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.sql");
        assert!(compress_dump_file(&missing).is_err());
    }
}
