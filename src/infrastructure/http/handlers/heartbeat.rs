//! Heartbeat Handler

use axum::extract::State;
use std::sync::Arc;

use crate::infrastructure::gateway::{GatewayRequest, GatewayResponse, Route};
use crate::infrastructure::http::state::AppState;

/// GET /heartbeat - 健康检查，不访问存储
pub async fn heartbeat(State(state): State<Arc<AppState>>) -> GatewayResponse {
    let request = GatewayRequest::new(Route::HEARTBEAT)
        .with_method("GET")
        .with_path(Route::HEARTBEAT);
    state.router.handle(&request).await
}
