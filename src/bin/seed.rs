//! 写入示例产品
//!
//! 每次运行插入一遍固定的五条产品，需要配置 `DATABASE_URL` 或 `database.url`。

use productos::app::producto::seeder;
use productos::build_repository;
use productos::infrastructure::{config::load_config, logger::Logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    if config.database.url.is_none() {
        error!("未配置数据库，请设置 DATABASE_URL");
        return Err("database url is not configured".into());
    }

    let repository = build_repository(&config).await?;
    let inserted = seeder::seed(repository.as_ref()).await.map_err(|e| {
        error!("写入示例产品失败: {}", e);
        e
    })?;

    info!(inserted, "✅ 示例产品写入完成");
    Ok(())
}
