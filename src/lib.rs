//! # 产品列表服务
//!
//! 从 `productos` 表读取全部产品并渲染为 HTML 表格，另附示例数据写入。
//! - `app`：产品模型、仓储、服务、渲染、处理器与示例数据
//! - `core`：错误处理与中间件
//! - `infrastructure`：配置、日志、数据库连接

pub mod app;
pub mod core;
pub mod infrastructure;

use std::sync::Arc;
use tracing::warn;

use crate::app::producto::{InMemoryProductRepository, ProductRepository};
use crate::core::error::CoreError;
use crate::infrastructure::config::Config;

/// 按配置创建产品仓储：配置了数据库连接串时使用 PostgreSQL，否则使用内存存储
pub async fn build_repository(config: &Config) -> Result<Arc<dyn ProductRepository>, CoreError> {
    match config.database.url.as_deref() {
        Some(url) => connect_postgres(url, config).await,
        None => {
            warn!("未配置数据库，使用内存存储");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
    }
}

#[cfg(feature = "database")]
async fn connect_postgres(
    url: &str,
    config: &Config,
) -> Result<Arc<dyn ProductRepository>, CoreError> {
    use crate::app::producto::PgProductRepository;
    use crate::infrastructure::database::DatabaseManager;

    tracing::info!(
        url = config.redacted_database_url().unwrap_or_default(),
        "连接数据库"
    );
    let manager = DatabaseManager::new(url, &config.database).await?;
    manager.ensure_schema().await?;

    Ok(Arc::new(PgProductRepository::new(manager.get_pool().clone())))
}

#[cfg(not(feature = "database"))]
async fn connect_postgres(
    _url: &str,
    _config: &Config,
) -> Result<Arc<dyn ProductRepository>, CoreError> {
    warn!("未启用 database 特性，忽略 database.url，使用内存存储");
    Ok(Arc::new(InMemoryProductRepository::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::producto::NewProduct;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_without_database_url_uses_empty_memory_store() {
        let config = Config::default();
        let repository = build_repository(&config).await.unwrap();
        assert!(repository.list_all().await.unwrap().is_empty());

        let created = repository
            .create(NewProduct::new("Webcam", "Cámara HD", dec!(59.90)))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(repository.list_all().await.unwrap(), vec![created]);
    }
}
