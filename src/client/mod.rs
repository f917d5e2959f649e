// ==========================================
// 库存管理系统 - 客户端层
// ==========================================
// 职责: 对账客户端（HTTP 调用）与客户端状态（库存快照 + 分槽错误）
// 约束: 请求失败只写入对应操作的错误槽，不触碰其余客户端状态；
//       失败的提交不清空暂存集合，可直接重交
// ==========================================

pub mod error;
pub mod http;
pub mod state;

// 重导出核心类型
pub use error::ClientError;
pub use http::InventoryClient;
pub use state::InventoryView;
