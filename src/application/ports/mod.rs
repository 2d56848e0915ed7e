//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod article_store;
mod blob_store;

pub use article_store::{ArticleStoreError, ArticleStorePort};
pub use blob_store::{BlobError, BlobStorePort};
