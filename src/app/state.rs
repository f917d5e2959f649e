// ==========================================
// 库存管理系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态（仓储句柄）并组装路由
// ==========================================

use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use axum::Router;

use crate::api::inventory_router;
use crate::repository::{InventoryRepository, RepositoryResult};

/// 应用状态
///
/// 所有端点共享同一个仓储句柄；状态按值克隆进各 handler
#[derive(Clone)]
pub struct AppState {
    /// 库存仓储
    pub repo: Arc<InventoryRepository>,
}

impl AppState {
    /// 打开数据库（并建表）后装配应用状态
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let repo = Arc::new(InventoryRepository::new(db_path)?);
        Ok(Self { repo })
    }

    /// 从已有仓储装配（测试常用）
    pub fn from_repository(repo: Arc<InventoryRepository>) -> Self {
        Self { repo }
    }
}

/// 组装完整路由（端点 + 请求日志 + CORS）
pub fn build_router(state: AppState) -> Router {
    inventory_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
