//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Article Context: 文章与文章摘要

pub mod article;
