//! 产品列表服务器

use std::time::Duration;

use productos::app::{
    create_routes,
    producto::{seeder, AppState, ProductService},
};
use productos::build_repository;
use productos::infrastructure::{
    config::{config_file, load_config},
    logger::Logger,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    info!(
        config_file = config_file().unwrap_or("默认配置"),
        "启动产品列表服务器..."
    );

    let repository = build_repository(&config).await.map_err(|e| {
        error!("初始化存储失败: {}", e);
        e
    })?;

    if config.app.seed_on_startup {
        seeder::seed(repository.as_ref()).await?;
    }

    let state = AppState {
        product_service: ProductService::new(repository),
    };
    let app = create_routes(state, Duration::from_secs(config.http.timeout_seconds));

    let addr = format!("{}:{}", config.http.bind_address, config.http.port);
    let listener = TcpListener::bind(&addr).await?;
    let addr = listener.local_addr()?;

    info!("🚀 产品列表服务器运行在 http://{}", addr);
    info!("   GET /productos - 产品列表");

    axum::serve(listener, app).await?;

    Ok(())
}
