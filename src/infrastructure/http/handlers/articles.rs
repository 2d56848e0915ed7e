//! Article HTTP Handlers
//!
//! 把 axum 请求翻译成 GatewayRequest，交给 ArticleRouter

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{Method, Uri},
};
use std::sync::Arc;

use crate::infrastructure::gateway::{GatewayRequest, GatewayResponse, Route};
use crate::infrastructure::http::state::AppState;

/// GET /articles - 文章摘要列表
pub async fn list_articles(State(state): State<Arc<AppState>>) -> GatewayResponse {
    let request = GatewayRequest::new(Route::ARTICLES)
        .with_method("GET")
        .with_path(Route::ARTICLES);
    state.router.handle(&request).await
}

/// GET /articles/:id - 单篇文章
///
/// 无法解码的 id（如非 UTF-8）按空 id 交给路由器，返回 404
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> GatewayResponse {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            tracing::warn!(path = %uri.path(), error = %rejection, "Undecodable article id");
            String::new()
        }
    };

    let request = GatewayRequest::new(Route::ARTICLE)
        .with_method("GET")
        .with_path(uri.path())
        .with_path_parameter("id", id);
    state.router.handle(&request).await
}

/// 未注册的路径：用实际路径作为路由模板，由路由器返回 404
pub async fn fallback(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> GatewayResponse {
    let request = GatewayRequest::new(uri.path())
        .with_method(method.as_str())
        .with_path(uri.path());
    state.router.handle(&request).await
}
