//! Persistence Layer - 文章仓储实现
//!
//! 文章以 JSON 对象的形式存放在对象存储中，通过 BlobStorePort 读取

mod blob_article_store;

pub use blob_article_store::{BlobArticleStore, BlobArticleStoreConfig};
