//! Article Context - 文章限界上下文
//!
//! 职责:
//! - 文章实体与列表摘要投影
//! - 文章 ID 与对象存储 key 之间的映射

mod entities;
mod errors;
mod value_objects;

pub use entities::{Article, ArticleSummary};
pub use errors::ArticleError;
pub use value_objects::{ArticleId, OBJECT_SUFFIX};
