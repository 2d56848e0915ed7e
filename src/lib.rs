//! blogd - 只读文章内容 API
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Article Context: 文章实体、摘要投影、ID 与对象 key 映射
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ArticleStore, BlobStore）
//!
//! 基础设施层 (infrastructure/):
//! - Gateway: 路由表与请求分派（heartbeat / articles / articles/{id}）
//! - HTTP: axum 服务器
//! - Persistence: 基于对象存储的文章仓储（并发扇出读取）
//! - Adapters: S3、本地目录对象存储
//! - Memory: 内存对象存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
