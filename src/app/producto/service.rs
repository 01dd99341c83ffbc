//! 产品业务服务

use std::sync::Arc;
use tracing::debug;

use super::model::Product;
use super::repository::ProductRepository;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// 读取全部产品，存储层错误原样返回
    pub async fn list_all(&self) -> Result<Vec<Product>, CoreError> {
        let products = self.repository.list_all().await?;
        debug!(count = products.len(), "已读取产品列表");
        Ok(products)
    }
}
