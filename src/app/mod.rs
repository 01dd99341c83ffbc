//! 应用层

pub mod producto;

use axum::{middleware, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::core::middleware::user_agent_logging_middleware;
use producto::{handler::list_products, AppState};

/// 创建路由
pub fn create_routes(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/productos", get(list_products))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(middleware::from_fn(user_agent_logging_middleware))
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
