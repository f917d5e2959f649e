// ==========================================
// 库存管理系统 - 导入层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

use crate::domain::validator::ValidationError;

/// 单行问题
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    /// 字段数不是 4（quantity,sku,description,store 定位取值）
    #[error("expected 4 fields (quantity,sku,description,store), got {0}")]
    FieldCount(usize),

    /// 行内容未通过条目校验
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// 问题行（带行号，行号从 1 计，表头为第 1 行）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {issue}")]
pub struct RowError {
    pub line: usize,
    pub issue: RowIssue,
}

/// 导入层错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    /// CSV 读取失败（编码/IO 层面）
    #[error("failed to read CSV: {0}")]
    Read(#[from] csv::Error),

    /// 聚合的问题行报告，一行失败则整次解析失败
    #[error("CSV contains {} invalid row(s): {}", .0.len(), summarize(.0))]
    InvalidRows(Vec<RowError>),
}

fn summarize(rows: &[RowError]) -> String {
    rows.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
