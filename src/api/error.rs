// ==========================================
// 库存管理系统 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误类型，转换仓储/校验错误为 HTTP 响应
// 约定: 失败响应体统一为 {"error": "<message>"}
// ==========================================

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::validator::ValidationError;
use crate::repository::error::RepositoryError;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求体形状错误 (400)
    // ==========================================
    #[error("Request body must be a JSON array")]
    NotAnArray,

    #[error("Inventory must contain at least one item")]
    EmptyBatch,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ==========================================
    // 唯一性错误 (400)
    // ==========================================
    #[error("Request contains duplicate SKUs")]
    DuplicateSkuInBatch,

    #[error("{0}")]
    UniqueConstraint(String),

    // ==========================================
    // 键寻址错误 (404)
    // ==========================================
    #[error("Item with SKU {sku} not found")]
    NotFound { sku: String },

    // ==========================================
    // 存储层错误 (500)
    // ==========================================
    #[error("{0}")]
    StoreFailure(String),
}

// ==========================================
// 从 RepositoryError 转换
// 目的: 将仓储层的技术错误映射为对应的 HTTP 语义
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { sku } => ApiError::NotFound { sku },
            RepositoryError::DuplicateSkuInBatch { .. } => ApiError::DuplicateSkuInBatch,
            RepositoryError::UniqueConstraintViolation(msg) => ApiError::UniqueConstraint(msg),
            RepositoryError::DatabaseConnectionError(msg)
            | RepositoryError::LockError(msg)
            | RepositoryError::DatabaseTransactionError(msg)
            | RepositoryError::DatabaseQueryError(msg) => ApiError::StoreFailure(msg),
            RepositoryError::Other(e) => ApiError::StoreFailure(e.to_string()),
        }
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotAnArray
            | ApiError::EmptyBatch
            | ApiError::Validation(_)
            | ApiError::DuplicateSkuInBatch
            | ApiError::UniqueConstraint(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("存储层失败: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
