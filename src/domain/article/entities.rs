//! Article Context - Entities

use serde::{Deserialize, Serialize};

/// 文章 - 对象存储中每个 `{id}.json` 对象的内容
///
/// 只读：本服务不创建、修改或删除文章
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
}

impl Article {
    /// 投影为列表摘要（去掉正文）
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            date: self.date.clone(),
        }
    }
}

/// 文章摘要 - 列表接口返回，不携带 content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub date: String,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            date: article.date,
        }
    }
}
