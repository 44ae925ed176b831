//! cangku-client - 启动入口
//!
//! 装配配置、遥测与 REST 客户端，拉取一次首页视图做状态自检

use std::sync::Arc;

use config::AppConfig;
use tracing::info;

use cangku_client::application::home::HomeScreen;
use cangku_client::infrastructure::rest::RestClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("config")?;
    if config.is_production() {
        telemetry::init_tracing_json(&config.telemetry.log_level);
    } else {
        telemetry::init_tracing(&config.telemetry.log_level);
    }

    info!("Starting {} ({})", config.app_name, config.app_env);

    let client = Arc::new(RestClient::new(&config.api)?);
    let home = HomeScreen::new(client.clone(), client.clone());

    let view = home.load().await?;
    info!(
        total = view.stats.total,
        in_stock = view.stats.in_stock,
        low_stock = view.stats.low_stock,
        "Goods statistics"
    );
    for recent in &view.recent {
        info!(
            goods = recent.entry.goods_name(),
            movement = %recent.entry.movement(),
            quantity = recent.entry.quantity(),
            time = %recent.time_display,
            "Recent movement"
        );
    }

    Ok(())
}
