// ==========================================
// 库存管理系统 - 领域层
// ==========================================
// 职责: 定义库存实体与条目校验器
// 红线: 校验器为纯函数，客户端与服务端共用同一份判定逻辑
// ==========================================

pub mod item;
pub mod validator;

// 重导出核心类型
pub use item::{InventoryItem, Item};
pub use validator::{validate, ValidationError};
