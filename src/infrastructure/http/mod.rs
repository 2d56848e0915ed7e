//! HTTP Layer - 只读文章 API
//!
//! 把 HTTP 请求翻译为 GatewayRequest 交给 ArticleRouter

pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
