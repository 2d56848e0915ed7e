//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文章存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 对象存储后端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// AWS S3 或 S3 兼容服务
    #[default]
    S3,
    /// 本地目录（开发用）
    Fs,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::S3 => "s3",
            StorageBackend::Fs => "fs",
        }
    }
}

/// 文章存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 存储后端: s3 | fs
    #[serde(default)]
    pub backend: StorageBackend,

    /// S3 bucket 名称
    #[serde(default)]
    pub bucket: String,

    /// AWS 区域
    #[serde(default = "default_region")]
    pub region: String,

    /// 自定义 S3 endpoint（MinIO、LocalStack 等）
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// 文章对象 key 前缀
    #[serde(default)]
    pub prefix: String,

    /// fs 后端的根目录
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// 列表时的最大并发读取数，0 表示不限制
    #[serde(default)]
    pub max_concurrent_fetches: usize,
}

fn default_region() -> String {
    "us-west-2".to_string()
}

fn default_root_dir() -> PathBuf {
    PathBuf::from("data/articles")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            bucket: String::new(),
            region: default_region(),
            endpoint_url: None,
            prefix: String::new(),
            root_dir: default_root_dir(),
            max_concurrent_fetches: 0,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::S3);
        assert_eq!(config.storage.region, "us-west-2");
        assert_eq!(config.storage.max_concurrent_fetches, 0);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(StorageBackend::S3.as_str(), "s3");
        assert_eq!(StorageBackend::Fs.as_str(), "fs");
    }
}
