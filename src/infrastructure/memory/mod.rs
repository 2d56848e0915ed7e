//! Memory Layer - In-Memory Object Storage
//!
//! 实现 BlobStorePort 的内存版本，用于测试和本地演示

mod blob_store;

pub use blob_store::InMemoryBlobStore;
