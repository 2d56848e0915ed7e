//! blogd - 只读文章 API
//!
//! 启动流程: 加载配置 -> 初始化日志 -> 构建对象存储 -> 文章仓储 -> 路由器 -> HTTP 服务器

use std::sync::Arc;

use blogd::application::BlobStorePort;
use blogd::config::{load_config, print_config, AppConfig, LogConfig, StorageBackend};
use blogd::infrastructure::adapters::{FileBlobStore, S3BlobStore, S3BlobStoreConfig};
use blogd::infrastructure::gateway::ArticleRouter;
use blogd::infrastructure::http::{AppState, HttpServer, ServerConfig};
use blogd::infrastructure::persistence::{BlobArticleStore, BlobArticleStoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("blogd - read-only article API");
    print_config(&config);

    // 创建对象存储适配器
    let blobs = create_blob_store(&config).await?;

    // 创建文章仓储与路由器
    let store_config = BlobArticleStoreConfig {
        prefix: config.storage.prefix.clone(),
        max_concurrent_fetches: config.storage.max_concurrent_fetches,
    };
    let store = Arc::new(BlobArticleStore::new(blobs, store_config));
    let router = ArticleRouter::new(store);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(router));

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置中的日志级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},blogd={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 按配置创建对象存储
async fn create_blob_store(config: &AppConfig) -> anyhow::Result<Arc<dyn BlobStorePort>> {
    let storage = &config.storage;

    match storage.backend {
        StorageBackend::S3 => {
            let mut s3_config = S3BlobStoreConfig::new(&storage.bucket, &storage.region);
            if let Some(endpoint_url) = &storage.endpoint_url {
                s3_config = s3_config.with_endpoint_url(endpoint_url);
            }
            Ok(Arc::new(S3BlobStore::from_config(&s3_config).await))
        }
        StorageBackend::Fs => {
            let store = FileBlobStore::new(&storage.root_dir)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to open article directory: {}", e))?;
            Ok(Arc::new(store))
        }
    }
}
