// ==========================================
// 库存管理系统 - 核心库
// ==========================================
// 技术栈: Axum + Rust + SQLite
// 系统定位: 库存对账与校验管道（staging → 校验 → 持久化 → 回读）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与校验
pub mod domain;

// 导入层 - CSV 外部数据
pub mod importer;

// 暂存层 - 客户端预览集合
pub mod staging;

// 数据仓储层 - 数据访问
pub mod repository;

// API 层 - HTTP 接口
pub mod api;

// 应用层 - 共享状态装配
pub mod app;

// 客户端层 - 对账客户端
pub mod client;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/建表统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::item::{InventoryItem, Item};
pub use domain::validator::{validate, ValidationError};

// 导入层
pub use importer::csv_parser::parse_csv;
pub use importer::error::ImportError;

// 暂存层
pub use staging::{StagingError, StagingSet};

// 仓储层
pub use repository::{InventoryRepository, RepositoryError, RepositoryResult};

// API 层
pub use api::{inventory_router, ApiError};

// 应用状态
pub use app::AppState;

// 客户端
pub use client::{ClientError, InventoryClient, InventoryView};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存管理系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
