// ==========================================
// 库存管理系统 - 对账客户端
// ==========================================
// 职责: 封装五个对账端点的 HTTP 调用与响应解析
// 约束: 无重试、无取消；请求要么完成要么失败
// ==========================================

use reqwest::Response;
use serde_json::Value;

use crate::client::error::ClientError;
use crate::domain::item::{InventoryItem, Item};

/// 对账客户端
#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl InventoryClient {
    /// # 参数
    /// - base_url: 形如 "http://127.0.0.1:5000"，末尾不带斜杠
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/inventory - 拉取全量库存（id 降序）
    pub async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>, ClientError> {
        let response = self.http.get(self.url("/api/inventory")).send().await?;
        let data = parse_response(response).await?;
        serde_json::from_value(data).map_err(|_| ClientError::UnexpectedShape)
    }

    /// POST /api/inventory - 批量提交（upsert）
    pub async fn submit_items(&self, items: &[Item]) -> Result<Vec<InventoryItem>, ClientError> {
        let response = self
            .http
            .post(self.url("/api/inventory"))
            .json(items)
            .send()
            .await?;
        let data = parse_response(response).await?;
        serde_json::from_value(data).map_err(|_| ClientError::UnexpectedShape)
    }

    /// POST /api/inventory/:sku - 无条件插入单条
    pub async fn create_item(&self, item: &Item) -> Result<InventoryItem, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/api/inventory/{}", item.sku)))
            .json(item)
            .send()
            .await?;
        let data = parse_response(response).await?;
        serde_json::from_value(data).map_err(|_| ClientError::UnexpectedShape)
    }

    /// PUT /api/inventory/:old_sku - 按当前 sku 定位整行覆盖
    pub async fn update_item(
        &self,
        old_sku: &str,
        item: &Item,
    ) -> Result<InventoryItem, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/inventory/{old_sku}")))
            .json(item)
            .send()
            .await?;
        let data = parse_response(response).await?;
        serde_json::from_value(data).map_err(|_| ClientError::UnexpectedShape)
    }

    /// DELETE /api/inventory/:sku - 按 sku 删除
    pub async fn delete_item(&self, sku: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/inventory/{sku}")))
            .send()
            .await?;
        parse_response(response).await?;
        Ok(())
    }
}

/// 统一响应解析
///
/// - 响应体必须是 JSON（否则 InvalidJson）
/// - 非 2xx 时取 {"error": ...} 作为服务端报告的失败消息
async fn parse_response(response: Response) -> Result<Value, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    let data: Value =
        serde_json::from_slice(&bytes).map_err(|_| ClientError::InvalidJson)?;

    if !status.is_success() {
        let message = data
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("request failed")
            .to_string();
        return Err(ClientError::Server {
            status: status.as_u16(),
            message,
        });
    }

    Ok(data)
}
