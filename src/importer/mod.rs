// ==========================================
// 库存管理系统 - 导入层
// ==========================================
// 职责: 将外部 CSV 文本解析为已校验的条目序列
// 约束: 逐行过校验器，任何问题行都会使整次解析失败（聚合报告）
// ==========================================

pub mod csv_parser;
pub mod error;

// 重导出核心接口
pub use csv_parser::parse_csv;
pub use error::{ImportError, RowError, RowIssue};
