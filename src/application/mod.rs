//! 应用层 - 端口定义
//!
//! 包含：
//! - ports: 六边形架构端口定义（ArticleStore、BlobStore）

pub mod ports;

pub use ports::{ArticleStoreError, ArticleStorePort, BlobError, BlobStorePort};
