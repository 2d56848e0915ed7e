//! Gateway Layer - 请求分派
//!
//! 传输无关的路由：输入请求描述（路由模板 + 路径参数），输出定稿的响应。
//! HTTP 服务器和 API Gateway 代理事件都可以走这里

mod router;
mod types;

pub use router::{ArticleRouter, Route};
pub use types::{GatewayRequest, GatewayResponse};
