// ==========================================
// InventoryRepository - 库存仓储
// ==========================================
// 职责: 管理 inventory 表的查询与写入
// 不变量:
// - sku 唯一由表上 UNIQUE(sku) 约束兜底
// - id 首次插入分配后不可变，upsert 走更新路径时 id 不变
// - 批量 upsert 整体一个事务：要么全写要么全不写
// ==========================================

use rusqlite::{params, Connection, Row};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::item::{InventoryItem, Item};
use crate::repository::error::{RepositoryError, RepositoryResult};

/// 库存仓储
///
/// 红线: 不含业务逻辑，只负责数据访问
pub struct InventoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl InventoryRepository {
    /// 打开数据库并初始化 schema
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例（连接须已建表）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 全量列出库存，按 id 降序（最近插入在前）
    pub fn list(&self) -> RepositoryResult<Vec<InventoryItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, quantity, sku, description, store
            FROM inventory
            ORDER BY id DESC
            "#,
        )?;

        let rows = stmt.query_map([], row_to_inventory_item)?;
        let mut inventory = Vec::new();
        for row in rows {
            inventory.push(row?);
        }
        Ok(inventory)
    }

    /// 批量 upsert（按 sku 冲突即更新）
    ///
    /// # 语义
    /// - 批内 sku 重复：落库前整批拒绝（DuplicateSkuInBatch）
    /// - sku 已存在：原位更新 quantity/description/store，id 不变
    /// - sku 不存在：插入新行并分配新 id
    /// - 整批一个事务，不产生部分写入
    ///
    /// # 返回
    /// - 与输入同序的已持久化行（事务内按 sku 回读，拿到真实 id）
    pub fn upsert_batch(&self, items: &[Item]) -> RepositoryResult<Vec<InventoryItem>> {
        // 批内查重必须发生在任何写入之前
        let mut seen = HashSet::new();
        for item in items {
            if !seen.insert(item.sku.as_str()) {
                return Err(RepositoryError::DuplicateSkuInBatch {
                    sku: item.sku.clone(),
                });
            }
        }

        let conn = self.get_conn()?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let mut persisted = Vec::with_capacity(items.len());
        for item in items {
            tx.execute(
                r#"
                INSERT INTO inventory (quantity, sku, description, store)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT (sku) DO UPDATE SET
                    quantity = excluded.quantity,
                    description = excluded.description,
                    store = excluded.store
                "#,
                params![item.quantity, item.sku, item.description, item.store],
            )?;

            // 更新路径上 last_insert_rowid 不可靠，按 sku 回读真实行
            let row = tx.query_row(
                r#"
                SELECT id, quantity, sku, description, store
                FROM inventory
                WHERE sku = ?1
                "#,
                params![item.sku],
                row_to_inventory_item,
            )?;
            persisted.push(row);
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        debug!(count = persisted.len(), "批量 upsert 完成");
        Ok(persisted)
    }

    /// 无条件插入一行（不做 sku 冲突预检）
    ///
    /// 与 upsert_batch 的 ON CONFLICT 语义刻意不对称：
    /// sku 已存在时由 UNIQUE 约束报错，而不是转为更新
    pub fn create_one(&self, item: &Item) -> RepositoryResult<InventoryItem> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO inventory (quantity, sku, description, store)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![item.quantity, item.sku, item.description, item.store],
        )?;

        let id = conn.last_insert_rowid();
        Ok(InventoryItem {
            id,
            quantity: item.quantity,
            sku: item.sku.clone(),
            description: item.description.clone(),
            store: item.store.clone(),
        })
    }

    /// 按当前 sku 定位并整行覆盖（sku 本身也可被改掉）
    ///
    /// # 返回
    /// - Ok(InventoryItem): 更新后的行（id 不变）
    /// - Err(NotFound): 无该 sku 的行
    pub fn update_by_sku(&self, old_sku: &str, item: &Item) -> RepositoryResult<InventoryItem> {
        let conn = self.get_conn()?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let changed = tx.execute(
            r#"
            UPDATE inventory
            SET quantity = ?1, sku = ?2, description = ?3, store = ?4
            WHERE sku = ?5
            "#,
            params![item.quantity, item.sku, item.description, item.store, old_sku],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                sku: old_sku.to_string(),
            });
        }

        let row = tx.query_row(
            r#"
            SELECT id, quantity, sku, description, store
            FROM inventory
            WHERE sku = ?1
            "#,
            params![item.sku],
            row_to_inventory_item,
        )?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(row)
    }

    /// 按 sku 永久删除
    pub fn delete_by_sku(&self, sku: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let deleted = conn.execute("DELETE FROM inventory WHERE sku = ?1", params![sku])?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound {
                sku: sku.to_string(),
            });
        }
        Ok(())
    }
}

/// 行映射: inventory 表 → InventoryItem
fn row_to_inventory_item(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        id: row.get(0)?,
        quantity: row.get(1)?,
        sku: row.get(2)?,
        description: row.get(3)?,
        store: row.get(4)?,
    })
}
