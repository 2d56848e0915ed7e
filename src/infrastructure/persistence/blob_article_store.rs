//! Blob Article Store - 基于对象存储的文章仓储
//!
//! 实现 ArticleStorePort trait
//!
//! 存储布局: 每篇文章一个 JSON 对象，key 为 `{prefix}{id}.json`

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

use crate::application::ports::{ArticleStoreError, ArticleStorePort, BlobError, BlobStorePort};
use crate::domain::article::{Article, ArticleId, ArticleSummary};

/// 文章仓储配置
#[derive(Debug, Clone, Default)]
pub struct BlobArticleStoreConfig {
    /// 对象 key 前缀，空字符串表示 bucket 根
    pub prefix: String,
    /// 列表时的最大并发读取数，0 表示不限制（每个对象一个并发任务）
    pub max_concurrent_fetches: usize,
}

/// 基于对象存储的文章仓储
#[derive(Clone)]
pub struct BlobArticleStore {
    blobs: Arc<dyn BlobStorePort>,
    config: BlobArticleStoreConfig,
}

impl BlobArticleStore {
    pub fn new(blobs: Arc<dyn BlobStorePort>, config: BlobArticleStoreConfig) -> Self {
        Self { blobs, config }
    }

    /// 使用默认配置（无前缀、不限并发）
    pub fn with_default_config(blobs: Arc<dyn BlobStorePort>) -> Self {
        Self::new(blobs, BlobArticleStoreConfig::default())
    }

    /// 读取并解析单个文章对象
    async fn fetch(
        blobs: &dyn BlobStorePort,
        id: &ArticleId,
        prefix: &str,
    ) -> Result<Article, ArticleStoreError> {
        let key = id.object_key(prefix);

        let body = blobs.get_object(&key).await.map_err(|e| match e {
            BlobError::NotFound(_) => {
                tracing::warn!(key = %key, "Article object not found");
                ArticleStoreError::NotFound(id.to_string())
            }
            BlobError::Backend(msg) => {
                tracing::error!(key = %key, error = %msg, "Failed to fetch article object");
                ArticleStoreError::Backend(msg)
            }
        })?;

        let article: Article = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(key = %key, error = %e, "Malformed article object");
            ArticleStoreError::MalformedData {
                key: key.clone(),
                message: e.to_string(),
            }
        })?;

        if article.id != id.as_str() {
            tracing::error!(
                key = %key,
                stored_id = %article.id,
                "Malformed article object: stored id does not match key"
            );
            return Err(ArticleStoreError::MalformedData {
                key,
                message: format!("stored id {:?} does not match key", article.id),
            });
        }

        Ok(article)
    }
}

#[async_trait]
impl ArticleStorePort for BlobArticleStore {
    async fn get_article(&self, id: &ArticleId) -> Result<Article, ArticleStoreError> {
        Self::fetch(self.blobs.as_ref(), id, &self.config.prefix).await
    }

    async fn list_summaries(&self) -> Result<Vec<ArticleSummary>, ArticleStoreError> {
        let prefix = &self.config.prefix;

        let keys = self.blobs.list_keys(prefix).await.map_err(|e| {
            tracing::error!(prefix = %prefix, error = %e, "Failed to list article objects");
            match e {
                BlobError::NotFound(msg) | BlobError::Backend(msg) => ArticleStoreError::Backend(msg),
            }
        })?;

        let limiter = match self.config.max_concurrent_fetches {
            0 => None,
            n => Some(Arc::new(Semaphore::new(n))),
        };

        // 每个任务把结果写入同一个 channel；任务不随调用方取消而中止
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();
        for key in &keys {
            let Some(id) = ArticleId::from_object_key(key, prefix) else {
                tracing::debug!(key = %key, "Skipping non-article object");
                continue;
            };

            let blobs = self.blobs.clone();
            let prefix = prefix.clone();
            let limiter = limiter.clone();
            let result_tx = result_tx.clone();

            tokio::spawn(async move {
                // 持有 permit 直到读取完成
                let _permit = match limiter {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };
                let result = Self::fetch(blobs.as_ref(), &id, &prefix).await;
                let _ = result_tx.send(result);
            });
        }
        drop(result_tx);

        // 所有发送端关闭后 recv 返回 None，即全部任务结束
        let mut summaries = Vec::new();
        while let Some(result) = result_rx.recv().await {
            // 失败已在 fetch 中记录
            if let Ok(article) = result {
                summaries.push(ArticleSummary::from(article));
            }
        }

        tracing::info!(
            listed = keys.len(),
            returned = summaries.len(),
            "Listed article summaries"
        );

        Ok(summaries)
    }
}
