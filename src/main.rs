// ==========================================
// 库存管理系统 - 服务端主入口
// ==========================================
// 技术栈: Axum + Rust + SQLite
// ==========================================

use inventory_manager::app::{build_router, AppState};
use inventory_manager::config::ServerConfig;
use inventory_manager::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", inventory_manager::APP_NAME);
    tracing::info!("系统版本: {}", inventory_manager::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config = ServerConfig::from_env();
    tracing::info!("使用数据库: {}", config.db_path);

    // 装配应用状态（打开数据库并建表）
    let state = AppState::new(&config.db_path)?;
    let router = build_router(state);

    // 启动服务
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("服务已启动: http://{addr}");

    axum::serve(listener, router).await?;

    tracing::info!("服务已退出");
    Ok(())
}
