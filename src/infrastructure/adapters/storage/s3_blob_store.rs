//! S3 Blob Store - 基于 AWS S3 的对象存储实现
//!
//! 实现 BlobStorePort trait
//!
//! - 列举: ListObjectsV2（单次调用，最多返回 1000 个 key，不分页）
//! - 读取: GetObject，`NoSuchKey` 归类为 `BlobError::NotFound`

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client;

use crate::application::ports::{BlobError, BlobStorePort};

/// S3 客户端配置
#[derive(Debug, Clone)]
pub struct S3BlobStoreConfig {
    /// Bucket 名称
    pub bucket: String,
    /// AWS 区域
    pub region: String,
    /// 自定义 endpoint（MinIO、LocalStack 等 S3 兼容服务），使用 path-style 访问
    pub endpoint_url: Option<String>,
}

impl S3BlobStoreConfig {
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            endpoint_url: None,
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }
}

/// S3 对象存储
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// 从配置创建，凭证走 AWS 默认凭证链（环境变量、profile、实例角色）
    pub async fn from_config(config: &S3BlobStoreConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint_url).force_path_style(true);
        }

        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            endpoint_url = ?config.endpoint_url,
            "S3 blob store initialized"
        );

        Self::new(Client::from_conf(builder.build()), config.bucket.clone())
    }
}

#[async_trait]
impl BlobStorePort for S3BlobStore {
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, BlobError> {
        let mut request = self.client.list_objects_v2().bucket(&self.bucket);
        if !prefix.is_empty() {
            request = request.prefix(prefix);
        }

        let output = request
            .send()
            .await
            .map_err(|e| BlobError::Backend(format!("S3 list failed: {}", e)))?;

        if output.is_truncated().unwrap_or(false) {
            tracing::warn!(
                bucket = %self.bucket,
                returned = output.key_count().unwrap_or_default(),
                "S3 listing truncated, remaining objects are not served"
            );
        }

        let keys = output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect();

        Ok(keys)
    }

    async fn get_object(&self, key: &str) -> Result<Vec<u8>, BlobError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let no_such_key = e
                    .as_service_error()
                    .map(|service_err| service_err.is_no_such_key())
                    .unwrap_or(false);
                if no_such_key {
                    BlobError::NotFound(key.to_string())
                } else {
                    BlobError::Backend(format!("S3 get {} failed: {}", key, e))
                }
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| BlobError::Backend(format!("S3 body read for {} failed: {}", key, e)))?
            .into_bytes()
            .to_vec();

        tracing::debug!(key = %key, size = data.len(), "Fetched object from S3");

        Ok(data)
    }
}
