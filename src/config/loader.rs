//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量（`BLOGD_` 前缀）
//! 2. 配置文件（config.toml）
//! 3. 默认值（`AWS_REGION`、`BUCKET_NAME` 存在时作为 region/bucket 的默认值）

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StorageBackend};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "BLOGD";

/// 加载应用配置
///
/// # 环境变量示例
/// - `BLOGD_SERVER__PORT=8080`
/// - `BLOGD_STORAGE__BUCKET=blog-articles`
/// - `BLOGD_STORAGE__BACKEND=fs`
/// - `BLOGD_STORAGE__ROOT_DIR=./articles`
/// - `BLOGD_STORAGE__MAX_CONCURRENT_FETCHES=16`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load(config_path, ENV_PREFIX)
}

fn load(config_path: Option<&Path>, env_prefix: &str) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("storage.backend", "s3")?
        .set_default(
            "storage.region",
            std::env::var("AWS_REGION").unwrap_or_else(|_| "us-west-2".to_string()),
        )?
        .set_default("storage.bucket", std::env::var("BUCKET_NAME").unwrap_or_default())?
        .set_default("storage.prefix", "")?
        .set_default("storage.root_dir", "data/articles")?
        .set_default("storage.max_concurrent_fetches", 0)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 层级分隔符: __ (双下划线)，例如 BLOGD_STORAGE__BUCKET=blog-articles
    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    match config.storage.backend {
        StorageBackend::S3 => {
            if config.storage.bucket.is_empty() {
                return Err(ConfigError::ValidationError(
                    "Bucket name cannot be empty for the s3 backend".to_string(),
                ));
            }
            if config.storage.region.is_empty() {
                return Err(ConfigError::ValidationError(
                    "Region cannot be empty for the s3 backend".to_string(),
                ));
            }
        }
        StorageBackend::Fs => {
            if config.storage.root_dir.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Root dir cannot be empty for the fs backend".to_string(),
                ));
            }
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Storage Backend: {}", config.storage.backend.as_str());
    match config.storage.backend {
        StorageBackend::S3 => {
            tracing::info!("Bucket: {}", config.storage.bucket);
            tracing::info!("Region: {}", config.storage.region);
            if let Some(endpoint_url) = &config.storage.endpoint_url {
                tracing::info!("Endpoint: {}", endpoint_url);
            }
        }
        StorageBackend::Fs => {
            tracing::info!("Root Directory: {:?}", config.storage.root_dir);
        }
    }
    tracing::info!("Key Prefix: {:?}", config.storage.prefix);
    if config.storage.max_concurrent_fetches == 0 {
        tracing::info!("Max Concurrent Fetches: unbounded");
    } else {
        tracing::info!("Max Concurrent Fetches: {}", config.storage.max_concurrent_fetches);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
