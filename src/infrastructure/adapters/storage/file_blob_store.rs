//! File Blob Store - 本地目录对象存储实现
//!
//! 实现 BlobStorePort trait，把一个目录当作 bucket：
//! key 是相对根目录、以 `/` 分隔的路径

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::application::ports::{BlobError, BlobStorePort};

/// 本地目录对象存储
pub struct FileBlobStore {
    /// 存储根目录
    root_dir: PathBuf,
}

impl FileBlobStore {
    /// 创建新的目录存储，根目录必须已存在
    pub async fn new(root_dir: impl AsRef<Path>) -> Result<Self, BlobError> {
        let root_dir = root_dir.as_ref().to_path_buf();

        let metadata = fs::metadata(&root_dir).await.map_err(|e| {
            BlobError::Backend(format!("Cannot open root dir {:?}: {}", root_dir, e))
        })?;
        if !metadata.is_dir() {
            return Err(BlobError::Backend(format!(
                "Root {:?} is not a directory",
                root_dir
            )));
        }

        Ok(Self { root_dir })
    }

    /// key 对应的文件路径，绝对路径或含 `..` 的 key 不允许访问根目录之外
    fn object_path(&self, key: &str) -> Option<PathBuf> {
        let relative = Path::new(key);
        let confined = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if key.is_empty() || !confined {
            return None;
        }
        Some(self.root_dir.join(relative))
    }

    /// 文件路径转 key（统一使用 `/` 分隔）
    fn object_key(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root_dir).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

#[async_trait]
impl BlobStorePort for FileBlobStore {
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, BlobError> {
        let mut keys = Vec::new();
        let mut pending = vec![self.root_dir.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir)
                .await
                .map_err(|e| BlobError::Backend(format!("Failed to read {:?}: {}", dir, e)))?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| BlobError::Backend(format!("Failed to read {:?}: {}", dir, e)))?
            {
                let path = entry.path();
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| BlobError::Backend(format!("Failed to stat {:?}: {}", path, e)))?;

                if file_type.is_dir() {
                    pending.push(path);
                    continue;
                }

                match self.object_key(&path) {
                    Some(key) if key.starts_with(prefix) => keys.push(key),
                    Some(_) => {}
                    None => tracing::warn!(path = ?path, "Skipping file with non UTF-8 name"),
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn get_object(&self, key: &str) -> Result<Vec<u8>, BlobError> {
        let path = self
            .object_path(key)
            .ok_or_else(|| BlobError::NotFound(key.to_string()))?;

        match fs::read(&path).await {
            Ok(data) => {
                tracing::debug!(key = %key, size = data.len(), "Read object from disk");
                Ok(data)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BlobError::NotFound(key.to_string())),
            Err(e) => Err(BlobError::Backend(format!("Failed to read {:?}: {}", path, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_get_object() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("a.json"), b"{\"id\":\"a\"}").unwrap();

        let store = FileBlobStore::new(temp_dir.path()).await.unwrap();
        let data = store.get_object("a.json").await.unwrap();
        assert_eq!(data, b"{\"id\":\"a\"}");
    }

    #[tokio::test]
    async fn test_missing_object_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let store = FileBlobStore::new(temp_dir.path()).await.unwrap();

        let err = store.get_object("missing.json").await.unwrap_err();
        assert!(matches!(err, BlobError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_escaping_keys_are_not_found() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("bucket");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(temp_dir.path().join("secret.json"), b"{}").unwrap();

        let store = FileBlobStore::new(&root).await.unwrap();
        for key in ["../secret.json", "/etc/passwd", "", "./a.json"] {
            let err = store.get_object(key).await.unwrap_err();
            assert!(matches!(err, BlobError::NotFound(_)), "key {:?}", key);
        }
    }

    #[tokio::test]
    async fn test_list_keys_recursive_with_prefix() {
        let temp_dir = tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("articles")).unwrap();
        std::fs::write(temp_dir.path().join("articles/a.json"), b"{}").unwrap();
        std::fs::write(temp_dir.path().join("articles/b.json"), b"{}").unwrap();
        std::fs::write(temp_dir.path().join("top.json"), b"{}").unwrap();

        let store = FileBlobStore::new(temp_dir.path()).await.unwrap();

        let all = store.list_keys("").await.unwrap();
        assert_eq!(all, vec!["articles/a.json", "articles/b.json", "top.json"]);

        let nested = store.list_keys("articles/").await.unwrap();
        assert_eq!(nested, vec!["articles/a.json", "articles/b.json"]);
    }

    #[tokio::test]
    async fn test_missing_root_dir_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let result = FileBlobStore::new(temp_dir.path().join("nope")).await;
        assert!(matches!(result, Err(BlobError::Backend(_))));
    }
}
