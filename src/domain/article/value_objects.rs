//! Article Context - Value Objects

use serde::{Deserialize, Serialize};

use super::ArticleError;

/// 文章对象的 key 后缀
pub const OBJECT_SUFFIX: &str = ".json";

/// 文章唯一标识
///
/// 不变量: 非空
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Result<Self, ArticleError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ArticleError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// 从对象 key 还原文章 ID
    ///
    /// 不在 prefix 下或不以 `.json` 结尾的 key 返回 None
    pub fn from_object_key(key: &str, prefix: &str) -> Option<Self> {
        let id = key.strip_prefix(prefix)?.strip_suffix(OBJECT_SUFFIX)?;
        Self::new(id).ok()
    }

    /// 文章在对象存储中的 key: `{prefix}{id}.json`
    pub fn object_key(&self, prefix: &str) -> String {
        format!("{}{}{}", prefix, self.0, OBJECT_SUFFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
