//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现与 HTTP 入口

pub mod adapters;
pub mod gateway;
pub mod http;
pub mod memory;
pub mod persistence;

pub use adapters::{FileBlobStore, S3BlobStore, S3BlobStoreConfig};
pub use gateway::{ArticleRouter, GatewayRequest, GatewayResponse, Route};
pub use memory::InMemoryBlobStore;
pub use persistence::{BlobArticleStore, BlobArticleStoreConfig};
