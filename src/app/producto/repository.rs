//! 产品仓储
//!
//! `ProductRepository` 只暴露两种能力：读取全部与创建。
//! 读取方依赖 `list_all`，种子数据依赖 `create`，互不感知具体存储。

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{NewProduct, Product};
use crate::core::error::CoreError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 返回全部产品，按主键（插入）顺序
    async fn list_all(&self) -> Result<Vec<Product>, CoreError>;

    /// 插入一条产品并返回带 id 的记录
    async fn create(&self, product: NewProduct) -> Result<Product, CoreError>;
}

/// 内存存储，未配置数据库时及测试中使用
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |p| p.id + 1);
        let product = product.with_id(id);
        rows.push(product.clone());
        Ok(product)
    }
}

#[cfg(feature = "database")]
pub use self::postgres::PgProductRepository;

#[cfg(feature = "database")]
mod postgres {
    use async_trait::async_trait;
    use sqlx::PgPool;

    use super::ProductRepository;
    use crate::app::producto::model::{NewProduct, Product};
    use crate::core::error::CoreError;

    /// PostgreSQL 存储，对应 `productos` 表
    #[derive(Clone)]
    pub struct PgProductRepository {
        pool: PgPool,
    }

    impl PgProductRepository {
        pub fn new(pool: PgPool) -> Self {
            Self { pool }
        }
    }

    #[async_trait]
    impl ProductRepository for PgProductRepository {
        async fn list_all(&self) -> Result<Vec<Product>, CoreError> {
            let products = sqlx::query_as::<_, Product>(
                "SELECT id, nombre, descripcion, precio FROM productos ORDER BY id",
            )
            .fetch_all(&self.pool)
            .await?;

            Ok(products)
        }

        async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
            let created = sqlx::query_as::<_, Product>(
                "INSERT INTO productos (nombre, descripcion, precio) VALUES ($1, $2, $3) \
                 RETURNING id, nombre, descripcion, precio",
            )
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await?;

            Ok(created)
        }
    }
}
