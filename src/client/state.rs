// ==========================================
// 库存管理系统 - 客户端状态
// ==========================================
// 职责: 维护最近一次拉取的库存快照与分操作的错误槽
// 约束:
// - 五个操作（刷新/提交/删除/编辑/新建）各自独立记录错误，
//   互不覆盖，失败不清空快照
// - 暂存集合只在提交成功后清空，失败时原样保留以便重交
// ==========================================

use tracing::warn;

use crate::client::error::ClientError;
use crate::client::http::InventoryClient;
use crate::domain::item::{InventoryItem, Item};
use crate::staging::StagingSet;

/// 客户端状态（库存视图）
///
/// 对应 UI 层消费的库存展示数据；由调用方显式持有并传引用，
/// 不做进程级单例
#[derive(Debug)]
pub struct InventoryView {
    client: InventoryClient,
    inventory: Vec<InventoryItem>,

    // ===== 分操作错误槽 =====
    pub refresh_error: Option<String>,
    pub submit_error: Option<String>,
    pub delete_error: Option<String>,
    pub edit_error: Option<String>,
    pub create_error: Option<String>,
}

impl InventoryView {
    pub fn new(client: InventoryClient) -> Self {
        Self {
            client,
            inventory: Vec::new(),
            refresh_error: None,
            submit_error: None,
            delete_error: None,
            edit_error: None,
            create_error: None,
        }
    }

    /// 当前库存快照（服务端 id 降序）
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// 全量刷新库存快照
    ///
    /// 失败时快照保持原样，错误写入 refresh_error
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.client.fetch_inventory().await {
            Ok(inventory) => {
                self.inventory = inventory;
                self.refresh_error = None;
                Ok(())
            }
            Err(e) => {
                warn!("刷新库存失败: {e}");
                self.refresh_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 提交暂存集合
    ///
    /// 成功: 清空暂存并全量刷新（刷新失败单独记录在 refresh_error）
    /// 失败: 暂存集合原样保留，错误写入 submit_error
    pub async fn submit_staged(
        &mut self,
        staging: &mut StagingSet,
    ) -> Result<(), ClientError> {
        match self.client.submit_items(staging.items()).await {
            Ok(_) => {
                staging.clear();
                self.submit_error = None;
                // 提交后的展示数据以服务端为准
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => {
                warn!("提交暂存失败: {e}");
                self.submit_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 删除一条并同步本地快照
    pub async fn remove_item(&mut self, sku: &str) -> Result<(), ClientError> {
        match self.client.delete_item(sku).await {
            Ok(()) => {
                self.inventory.retain(|row| row.sku != sku);
                self.delete_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(sku = %sku, "删除失败: {e}");
                self.delete_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 编辑一条（按旧 sku 定位）并同步本地快照
    pub async fn edit_item(&mut self, old_sku: &str, new_item: &Item) -> Result<(), ClientError> {
        match self.client.update_item(old_sku, new_item).await {
            Ok(updated) => {
                for row in &mut self.inventory {
                    if row.sku == old_sku {
                        *row = updated.clone();
                    }
                }
                self.edit_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(sku = %old_sku, "编辑失败: {e}");
                self.edit_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// 新建一条（无条件插入）并追加进本地快照
    pub async fn create_item(&mut self, item: &Item) -> Result<(), ClientError> {
        match self.client.create_item(item).await {
            Ok(created) => {
                self.inventory.push(created);
                self.create_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(sku = %item.sku, "新建失败: {e}");
                self.create_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
