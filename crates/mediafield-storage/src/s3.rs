use crate::traits::{Disk, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use mediafield_core::DiskBackend;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStore, ObjectStoreExt, PutPayload, Result as ObjectResult};

/// S3 disk implementation
#[derive(Clone)]
pub struct S3Disk {
    store: AmazonS3,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Disk {
    /// Create a new S3Disk instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        // Build AmazonS3 object store from environment and explicit settings.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.clone())
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::Config(e.to_string()))?;

        Ok(S3Disk {
            store,
            bucket,
            region,
            endpoint_url,
        })
    }

    /// Generate public URL for an object
    ///
    /// For AWS S3, uses the standard virtual-hosted format; for
    /// S3-compatible providers, builds a path-style URL off the endpoint.
    fn generate_url(&self, key: &str) -> String {
        if let Some(ref endpoint) = self.endpoint_url {
            let base_url = endpoint.trim_end_matches('/');
            format!("{}/{}/{}", base_url, self.bucket, key)
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            )
        }
    }
}

#[async_trait]
impl Disk for S3Disk {
    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<String> {
        let size = data.len() as u64;
        let bytes = Bytes::from(data);
        let location = Path::from(key.to_string());

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = self.store.put(&location, PutPayload::from(bytes)).await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 put failed"
            );
            StorageError::WriteFailed(e.to_string())
        })?;

        let url = self.generate_url(key);

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 put successful"
        );

        Ok(url)
    }

    async fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        let location = Path::from(key.to_string());

        let result: ObjectResult<_> = self.store.get(&location).await;

        let result = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(key.to_string()),
            other => StorageError::ReadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let location = Path::from(key.to_string());
        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn delete_directory(&self, prefix: &str) -> StorageResult<bool> {
        let start = std::time::Instant::now();
        let location = Path::from(prefix.to_string());

        // Object stores have no real directories: list the prefix and
        // delete every object under it.
        let mut listing = self.store.list(Some(&location));
        let mut deleted = 0u64;

        while let Some(meta) = listing.next().await {
            let meta = meta.map_err(|e| StorageError::Backend(e.to_string()))?;
            self.store.delete(&meta.location).await.map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %meta.location,
                    "S3 delete failed"
                );
                StorageError::DeleteFailed(e.to_string())
            })?;
            deleted += 1;
        }

        if deleted > 0 {
            tracing::info!(
                bucket = %self.bucket,
                prefix = %prefix,
                deleted_objects = deleted,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 delete_directory successful"
            );
        }

        Ok(deleted > 0)
    }

    fn url(&self, key: &str) -> String {
        self.generate_url(key)
    }

    fn backend_type(&self) -> DiskBackend {
        DiskBackend::S3
    }
}
