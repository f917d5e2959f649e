// ==========================================
// 库存管理系统 - 库存领域模型
// ==========================================
// 对齐: db.rs inventory 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Item - 暂存条目（未持久化）
// ==========================================
// 用途: 暂存集合与批量提交的载体，经过校验器后才会构造
// 约束: sku 必须满足 AA-0000 格式（由 validator 保证）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub quantity: i64,       // 数量（由字符串/数值统一强转为整数）
    pub sku: String,         // 库存单元编码（两位字母-四位数字）
    pub description: String, // 描述（允许为空串）
    pub store: String,       // 门店（允许为空串）
}

// ==========================================
// InventoryItem - 已持久化条目
// ==========================================
// 约束: id 由 AUTOINCREMENT 分配，首次插入后不可变、不复用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64, // 服务端分配的行号
    pub quantity: i64,
    pub sku: String,
    pub description: String,
    pub store: String,
}

impl InventoryItem {
    /// 去掉 id，还原为暂存条目形态
    pub fn into_item(self) -> Item {
        Item {
            quantity: self.quantity,
            sku: self.sku,
            description: self.description,
            store: self.store,
        }
    }
}
