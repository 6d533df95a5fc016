#[cfg(feature = "storage-local")]
use crate::LocalDisk;
#[cfg(feature = "storage-s3")]
use crate::S3Disk;
use crate::{Disk, DiskBackend, StorageError, StorageResult};
use mediafield_core::StorageConfig;
use std::sync::Arc;

/// Create a disk backend based on configuration
pub async fn create_disk(config: &StorageConfig) -> StorageResult<Arc<dyn Disk>> {
    match config.backend {
        #[cfg(feature = "storage-local")]
        DiskBackend::Local => {
            let base_path = config.local_path.clone().ok_or_else(|| {
                StorageError::Config("MEDIAFIELD_LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = config.local_base_url.clone().ok_or_else(|| {
                StorageError::Config("MEDIAFIELD_LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;

            let disk = LocalDisk::new(base_path, base_url).await?;
            Ok(Arc::new(disk))
        }

        #[cfg(not(feature = "storage-local"))]
        DiskBackend::Local => Err(StorageError::Config(
            "Local disk backend not available (storage-local feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-s3")]
        DiskBackend::S3 => {
            let bucket = config.s3_bucket.clone().ok_or_else(|| {
                StorageError::Config("MEDIAFIELD_S3_BUCKET not configured".to_string())
            })?;
            let region = config.s3_region.clone().ok_or_else(|| {
                StorageError::Config("MEDIAFIELD_S3_REGION or AWS_REGION not configured".to_string())
            })?;
            let endpoint = config.s3_endpoint.clone();

            let disk = S3Disk::new(bucket, region, endpoint).await?;
            Ok(Arc::new(disk))
        }

        #[cfg(not(feature = "storage-s3"))]
        DiskBackend::S3 => Err(StorageError::Config(
            "S3 disk backend not available (storage-s3 feature not enabled)".to_string(),
        )),
    }
}
