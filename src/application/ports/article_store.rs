//! Article Store Port - 出站端口
//!
//! 文章读取的抽象接口，路由层只依赖这个 trait

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::article::{Article, ArticleId, ArticleSummary};

/// 文章存储错误
#[derive(Debug, Error)]
pub enum ArticleStoreError {
    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Malformed article object {key}: {message}")]
    MalformedData { key: String, message: String },
}

impl ArticleStoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArticleStoreError::NotFound(_))
    }
}

/// Article Store Port
#[async_trait]
pub trait ArticleStorePort: Send + Sync {
    /// 读取单篇文章
    ///
    /// 对象不存在时返回 `ArticleStoreError::NotFound`，不会混入其他错误
    async fn get_article(&self, id: &ArticleId) -> Result<Article, ArticleStoreError>;

    /// 列出所有文章摘要
    ///
    /// 只有列举本身失败才返回错误；单篇读取失败的文章被跳过。
    /// 返回顺序不保证
    async fn list_summaries(&self) -> Result<Vec<ArticleSummary>, ArticleStoreError>;
}
