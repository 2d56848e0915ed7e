//! In-Memory Blob Store Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{BlobError, BlobStorePort};

/// 内存对象存储
pub struct InMemoryBlobStore {
    objects: DashMap<String, Vec<u8>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            objects: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 写入对象（覆盖同名 key）
    pub fn put(&self, key: impl Into<String>, data: impl Into<Vec<u8>>) {
        let key = key.into();
        let data = data.into();
        tracing::debug!(key = %key, size = data.len(), "Object stored in memory");
        self.objects.insert(key, data);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStorePort for InMemoryBlobStore {
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, BlobError> {
        let mut keys: Vec<String> = self
            .objects
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn get_object(&self, key: &str) -> Result<Vec<u8>, BlobError> {
        self.objects
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| BlobError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemoryBlobStore::new();
        assert!(store.is_empty());
        store.put("a.json", b"{}".to_vec());

        assert_eq!(store.get_object("a.json").await.unwrap(), b"{}");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_is_not_found() {
        let store = InMemoryBlobStore::new();
        let err = store.get_object("missing.json").await.unwrap_err();
        assert!(matches!(err, BlobError::NotFound(key) if key == "missing.json"));
    }

    #[tokio::test]
    async fn test_list_keys_filters_by_prefix() {
        let store = InMemoryBlobStore::new();
        store.put("articles/a.json", "{}");
        store.put("articles/b.json", "{}");
        store.put("drafts/c.json", "{}");

        let keys = store.list_keys("articles/").await.unwrap();
        assert_eq!(keys, vec!["articles/a.json", "articles/b.json"]);

        assert_eq!(store.list_keys("").await.unwrap().len(), 3);
    }
}
