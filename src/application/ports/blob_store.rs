//! Blob Store Port - 出站端口
//!
//! 对象存储的抽象接口（bucket 内按 key 列举、按 key 读取）
//! 具体实现在 infrastructure 层（S3、本地目录、内存）

use async_trait::async_trait;
use thiserror::Error;

/// 对象存储错误
///
/// 后端特有的错误在适配器边界被归类为这两种
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("No such key: {0}")]
    NotFound(String),

    #[error("Blob backend error: {0}")]
    Backend(String),
}

/// Blob Store Port
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// 列出 prefix 下的所有对象 key（单次调用，不分页）
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, BlobError>;

    /// 读取对象的完整内容
    async fn get_object(&self, key: &str) -> Result<Vec<u8>, BlobError>;
}
