// ==========================================
// 库存管理系统 - API 层
// ==========================================
// 职责: 对账端点集（提交批次/单条增改删/全量列出）
// 红线: 请求体按未定型 JSON 接收并过共享校验器，
//       保证与客户端侧判定一致（客户端不是可信闸门）
// ==========================================

pub mod error;
pub mod inventory_api;

// 重导出核心接口
pub use error::{ApiError, ApiResult};
pub use inventory_api::inventory_router;
