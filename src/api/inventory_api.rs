// ==========================================
// 库存管理系统 - 库存对账端点
// ==========================================
// 端点表:
//   GET    /api/inventory        → 200 全量列出（id 降序）
//   POST   /api/inventory        → 201 批量 upsert
//   POST   /api/inventory/:sku   → 200 无条件插入单条
//   PUT    /api/inventory/:sku   → 200 按当前 sku 整行覆盖
//   DELETE /api/inventory/:sku   → 200 {"message":"Success"}
// ==========================================

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::api::error::{ApiError, ApiResult};
use crate::app::AppState;
use crate::domain::item::{InventoryItem, Item};
use crate::domain::validator::validate;

/// 构建库存端点路由
pub fn inventory_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/inventory",
            get(list_inventory).post(submit_inventory),
        )
        .route(
            "/api/inventory/:sku",
            delete(delete_item).put(update_item).post(create_item),
        )
}

/// GET /api/inventory - 全量列出库存
async fn list_inventory(State(state): State<AppState>) -> ApiResult<Json<Vec<InventoryItem>>> {
    let inventory = state.repo.list()?;
    debug!(count = inventory.len(), "列出库存");
    Ok(Json(inventory))
}

/// POST /api/inventory - 批量提交（upsert）
///
/// 请求体为未定型 JSON 数组，逐条过共享校验器；
/// 批内 sku 查重在任何写入之前，整批原子落库
async fn submit_inventory(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Vec<InventoryItem>>)> {
    let candidates = body.as_array().ok_or(ApiError::NotAnArray)?;
    if candidates.is_empty() {
        return Err(ApiError::EmptyBatch);
    }

    let mut items = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        items.push(validate(candidate)?);
    }

    let persisted = state.repo.upsert_batch(&items)?;
    info!(count = persisted.len(), "批量提交落库");
    Ok((StatusCode::CREATED, Json(persisted)))
}

/// POST /api/inventory/:sku - 无条件插入单条
///
/// 刻意不对称：不做 sku 冲突预检，撞上已有 sku 时
/// 由 UNIQUE 约束报 400，而不是像批量提交那样转为更新
async fn create_item(
    State(state): State<AppState>,
    Path(_sku): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<InventoryItem>> {
    let item: Item = validate(&body)?;
    let created = state.repo.create_one(&item)?;
    info!(sku = %created.sku, id = created.id, "插入单条");
    Ok(Json(created))
}

/// PUT /api/inventory/:sku - 按当前 sku 定位并整行覆盖
///
/// 路径里的 sku 是"旧" sku；载荷里的 sku 可以与之不同（允许改 sku）
async fn update_item(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<InventoryItem>> {
    let item: Item = validate(&body)?;
    let updated = state.repo.update_by_sku(&sku, &item)?;
    info!(old_sku = %sku, new_sku = %updated.sku, "更新单条");
    Ok(Json(updated))
}

/// DELETE /api/inventory/:sku - 按 sku 永久删除
async fn delete_item(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> ApiResult<Json<Value>> {
    state.repo.delete_by_sku(&sku)?;
    info!(sku = %sku, "删除单条");
    Ok(Json(json!({ "message": "Success" })))
}
