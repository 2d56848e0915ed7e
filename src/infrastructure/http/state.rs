//! Application State
//!
//! HTTP 层共享的只读状态

use crate::infrastructure::gateway::ArticleRouter;

/// 应用状态
pub struct AppState {
    pub router: ArticleRouter,
}

impl AppState {
    pub fn new(router: ArticleRouter) -> Self {
        Self { router }
    }
}
