//! HTTP Routes
//!
//! API Endpoints:
//! - /heartbeat      GET  健康检查
//! - /articles       GET  文章摘要列表
//! - /articles/:id   GET  单篇文章
//!
//! 其余路径交给路由器返回 404

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/heartbeat", get(handlers::heartbeat))
        .route("/articles", get(handlers::list_articles))
        .route("/articles/:id", get(handlers::get_article))
        .fallback(handlers::fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{HeaderMap, Request, StatusCode},
    };
    use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
    use tower::util::ServiceExt;

    use crate::domain::article::{Article, ArticleSummary};
    use crate::infrastructure::gateway::ArticleRouter;
    use crate::infrastructure::memory::InMemoryBlobStore;
    use crate::infrastructure::persistence::BlobArticleStore;

    fn create_test_router() -> Router {
        let blobs = InMemoryBlobStore::new();
        for (id, title) in [("a", "Hello"), ("b", "World")] {
            let article = Article {
                id: id.to_string(),
                title: title.to_string(),
                content: format!("content of {}", id),
                date: "2024-01-01".to_string(),
            };
            blobs.put(format!("{}.json", id), serde_json::to_vec(&article).unwrap());
        }

        let store = BlobArticleStore::with_default_config(blobs.arc());
        let state = AppState::new(ArticleRouter::new(Arc::new(store)));
        create_routes().with_state(Arc::new(state))
    }

    async fn send_get(uri: &str) -> (StatusCode, HeaderMap, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = create_test_router().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_heartbeat() {
        let (status, _, body) = send_get("/heartbeat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_list_articles() {
        let (status, headers, body) = send_get("/articles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(!body.contains("\"content\""));

        let mut summaries: Vec<ArticleSummary> = serde_json::from_str(&body).unwrap();
        summaries.sort_by(|x, y| x.id.cmp(&y.id));
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_get_article() {
        let (status, headers, body) = send_get("/articles/a").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[CONTENT_TYPE], "application/json");

        let article: Article = serde_json::from_str(&body).unwrap();
        assert_eq!(article.id, "a");
        assert_eq!(article.content, "content of a");
    }

    #[tokio::test]
    async fn test_get_missing_article() {
        let (status, headers, _) = send_get("/articles/c").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_undecodable_article_id_is_not_found() {
        let (status, headers, body) = send_get("/articles/%FF").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _, body) = send_get("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }
}
