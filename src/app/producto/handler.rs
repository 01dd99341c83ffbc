//! 产品列表处理器

use axum::{extract::State, response::Html};

use super::{service::ProductService, view};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// `GET /productos`：无论是否有产品都返回 200
pub async fn list_products(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    let products = state.product_service.list_all().await?;
    Ok(Html(view::render(&products)?))
}
