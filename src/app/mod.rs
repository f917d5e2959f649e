// ==========================================
// 库存管理系统 - 应用层
// ==========================================
// 职责: 共享状态装配与路由组装
// ==========================================

pub mod state;

pub use state::{build_router, AppState};
