// dbbackupd/src/backup/s3_upload.rs
use anyhow::{Context, Result};
use aws_sdk_s3 as s3;
use s3::config::Region;
use s3::primitives::ByteStream;
use std::path::Path;
use tracing::info;

use crate::config::StorageConfig;

/// Uploads a backup artifact to an S3-compatible object storage service.
///
/// One `PutObject` per call, awaited to completion; there is no retry and no
/// multipart handling, so a failed transfer must be redone in full by a
/// later cycle. Very large artifacts may run into provider request limits,
/// which surface here as an upload failure.
pub async fn upload_file_to_s3(
    storage: &StorageConfig,
    file_path: &Path,
    s3_key: &str,
) -> Result<()> {
    info!(
        "Uploading {} to bucket {} with key {}",
        file_path.display(),
        storage.bucket_name,
        s3_key
    );

    let mut loader = aws_config::defaults(s3::config::BehaviorVersion::latest())
        .region(Region::new(storage.region.clone()))
        .credentials_provider(s3::config::Credentials::new(
            &storage.access_key_id,
            &storage.secret_access_key,
            None,     // session_token
            None,     // expiry
            "Static", // provider_name
        ));
    if let Some(endpoint_url) = &storage.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let sdk_config = loader.load().await;

    let client = s3::Client::new(&sdk_config);

    let body = ByteStream::from_path(file_path).await.with_context(|| {
        format!(
            "Failed to create ByteStream from file: {}",
            file_path.display()
        )
    })?;

    client
        .put_object()
        .bucket(&storage.bucket_name)
        .key(s3_key)
        .body(body)
        .send()
        .await
        .with_context(|| {
            format!(
                "Failed to upload file {} to S3 bucket {} with key {}",
                file_path.display(),
                storage.bucket_name,
                s3_key
            )
        })?;

    info!(
        "✅ Successfully uploaded {} to S3 bucket {} with key {}",
        file_path.display(),
        storage.bucket_name,
        s3_key
    );
    Ok(())
}
