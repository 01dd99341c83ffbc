//! 产品数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 已持久化的产品，`id` 由存储层分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    #[cfg_attr(feature = "database", sqlx(rename = "nombre"))]
    pub name: String,
    #[cfg_attr(feature = "database", sqlx(rename = "descripcion"))]
    pub description: String,
    #[cfg_attr(feature = "database", sqlx(rename = "precio"))]
    pub price: Decimal,
}

/// 待创建的产品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    pub(crate) fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}
