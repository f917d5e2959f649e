// ==========================================
// 库存管理系统 - 客户端错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 客户端错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    /// 网络层失败（连接不上/超时等）
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 响应体不是合法 JSON
    #[error("Invalid JSON response from server")]
    InvalidJson,

    /// 响应是 JSON 但不是预期的载荷形状
    #[error("Invalid inventory data format received from server")]
    UnexpectedShape,

    /// 服务端报告的失败（响应体 {"error": ...} 的内容）
    #[error("{message}")]
    Server { status: u16, message: String },
}
