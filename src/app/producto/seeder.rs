//! 示例产品数据

use rust_decimal::Decimal;
use tracing::info;

use super::model::NewProduct;
use super::repository::ProductRepository;
use crate::core::error::CoreError;

/// 固定的五条示例产品：名称、描述、价格（单位：分）
const SAMPLE_PRODUCTS: [(&str, &str, i64); 5] = [
    (
        "Laptop Dell",
        "Laptop de alto rendimiento con procesador Intel i7",
        120000,
    ),
    ("Mouse Logitech", "Mouse inalámbrico ergonómico", 4599),
    (
        "Teclado Mecánico",
        "Teclado mecánico RGB con switches Cherry MX",
        15000,
    ),
    ("Monitor LG 27\"", "Monitor 4K UltraHD con 144Hz", 45050),
    (
        "Auriculares Sony",
        "Auriculares inalámbricos con cancelación de ruido",
        29999,
    ),
];

/// 示例产品列表
pub fn sample_products() -> Vec<NewProduct> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|&(name, description, cents)| {
            NewProduct::new(name, description, Decimal::new(cents, 2))
        })
        .collect()
}

/// 写入示例产品，返回插入条数
///
/// 非幂等：重复执行会产生重复行。遇到第一个错误即返回，之前插入的行保留。
pub async fn seed(repository: &dyn ProductRepository) -> Result<usize, CoreError> {
    let mut inserted = 0;
    for product in sample_products() {
        let created = repository.create(product).await?;
        info!(id = created.id, name = %created.name, "插入示例产品");
        inserted += 1;
    }

    info!(inserted, "示例产品写入完成");
    Ok(inserted)
}
