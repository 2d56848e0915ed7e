//! Article Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArticleError {
    #[error("无效的文章 ID: {0:?}")]
    InvalidId(String),
}
