//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

/// 客户端标识日志中间件
///
/// 请求行、状态码与耗时由 `TraceLayer` 记录，这里只补充 User-Agent。
pub async fn user_agent_logging_middleware(req: Request, next: Next) -> Response {
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");
    debug!(user_agent, uri = %req.uri(), "客户端");

    next.run(req).await
}
