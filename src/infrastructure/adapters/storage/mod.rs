//! Storage Adapters - BlobStorePort 的具体实现

mod file_blob_store;
mod s3_blob_store;

pub use file_blob_store::FileBlobStore;
pub use s3_blob_store::{S3BlobStore, S3BlobStoreConfig};
