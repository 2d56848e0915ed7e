//! Article Router
//!
//! 按路由模板精确匹配，把请求分派到三个操作:
//! - /heartbeat       健康检查
//! - /articles        文章摘要列表
//! - /articles/{id}   单篇文章
//!
//! 其他路由模板一律 404 "Not Found"

use serde::Serialize;
use std::sync::Arc;

use crate::application::ports::{ArticleStoreError, ArticleStorePort};
use crate::domain::article::ArticleId;

use super::types::{GatewayRequest, GatewayResponse};

/// 路由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Heartbeat,
    ListArticles,
    GetArticle,
}

impl Route {
    pub const HEARTBEAT: &'static str = "/heartbeat";
    pub const ARTICLES: &'static str = "/articles";
    pub const ARTICLE: &'static str = "/articles/{id}";

    /// 按路由模板精确匹配
    pub fn from_resource(resource: &str) -> Option<Self> {
        match resource {
            Self::HEARTBEAT => Some(Route::Heartbeat),
            Self::ARTICLES => Some(Route::ListArticles),
            Self::ARTICLE => Some(Route::GetArticle),
            _ => None,
        }
    }

    pub fn resource(&self) -> &'static str {
        match self {
            Route::Heartbeat => Self::HEARTBEAT,
            Route::ListArticles => Self::ARTICLES,
            Route::GetArticle => Self::ARTICLE,
        }
    }
}

/// 文章路由器
///
/// 持有文章存储，`handle` 总是返回响应，内部错误映射为 5xx
#[derive(Clone)]
pub struct ArticleRouter {
    store: Arc<dyn ArticleStorePort>,
}

impl ArticleRouter {
    pub fn new(store: Arc<dyn ArticleStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, request: &GatewayRequest) -> GatewayResponse {
        let Some(route) = Route::from_resource(&request.resource) else {
            tracing::warn!(
                resource = %request.resource,
                path = ?request.path,
                method = ?request.http_method,
                "No route found for request"
            );
            return GatewayResponse::plain(404, "Not Found");
        };

        tracing::info!(
            route = ?route,
            path = ?request.path,
            method = ?request.http_method,
            path_parameters = ?request.path_parameters,
            "Handling request"
        );

        match route {
            Route::Heartbeat => GatewayResponse::plain(200, "OK"),
            Route::ListArticles => self.list_articles().await,
            Route::GetArticle => self.get_article(request).await,
        }
    }

    async fn list_articles(&self) -> GatewayResponse {
        match self.store.list_summaries().await {
            Ok(summaries) => json_ok(&summaries),
            Err(e) => {
                tracing::error!(error = %e, "Failed to list articles");
                GatewayResponse::json(500, "")
            }
        }
    }

    async fn get_article(&self, request: &GatewayRequest) -> GatewayResponse {
        let raw_id = request.path_parameter("id").unwrap_or_default();
        let id = match ArticleId::new(raw_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected article request");
                return GatewayResponse::json(404, "");
            }
        };

        match self.store.get_article(&id).await {
            Ok(article) => json_ok(&article),
            Err(ArticleStoreError::NotFound(_)) => GatewayResponse::json(404, ""),
            Err(e) => {
                tracing::error!(article_id = %id, error = %e, "Failed to get article");
                GatewayResponse::json(500, "")
            }
        }
    }
}

fn json_ok<T: Serialize>(value: &T) -> GatewayResponse {
    match serde_json::to_string(value) {
        Ok(body) => GatewayResponse::json(200, body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            GatewayResponse::json(500, "")
        }
    }
}
