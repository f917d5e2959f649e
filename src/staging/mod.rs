// ==========================================
// 库存管理系统 - 暂存集合
// ==========================================
// 职责: 客户端"预览"集合，保存尚未提交的条目
// 不变量: 任意时刻暂存条目之间 sku 互不重复
//         （单加、批量加、编辑都在改动前检查）
// 约束: 全部同步操作，无挂起
// ==========================================

use thiserror::Error;

use crate::domain::item::Item;

// ==========================================
// StagingError - 暂存层错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StagingError {
    /// sku 与已暂存条目冲突
    #[error("Item with SKU {sku} already exists")]
    DuplicateSku { sku: String },

    /// 下标越界
    #[error("index {index} out of range (len = {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// ==========================================
// StagingSet - 暂存集合
// ==========================================
/// 有序的未提交条目集合，按下标与 sku 双路寻址
#[derive(Debug, Default, Clone)]
pub struct StagingSet {
    items: Vec<Item>,
}

impl StagingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条；sku 与已有条目冲突则拒绝
    pub fn add_one(&mut self, item: Item) -> Result<(), StagingError> {
        if self.items.iter().any(|existing| existing.sku == item.sku) {
            return Err(StagingError::DuplicateSku { sku: item.sku });
        }
        self.items.push(item);
        Ok(())
    }

    /// 原子批量追加
    ///
    /// 入批条目与已有条目冲突、或入批条目彼此冲突时整批拒绝，
    /// 不产生任何部分写入；成功时按输入顺序追加
    pub fn add_many(&mut self, incoming: Vec<Item>) -> Result<(), StagingError> {
        // 先查与已有条目的冲突
        if let Some(dup) = incoming
            .iter()
            .find(|item| self.items.iter().any(|existing| existing.sku == item.sku))
        {
            return Err(StagingError::DuplicateSku {
                sku: dup.sku.clone(),
            });
        }

        // 再查入批内部的冲突
        for (i, item) in incoming.iter().enumerate() {
            if incoming[..i].iter().any(|prev| prev.sku == item.sku) {
                return Err(StagingError::DuplicateSku {
                    sku: item.sku.clone(),
                });
            }
        }

        self.items.extend(incoming);
        Ok(())
    }

    /// 移除指定下标的条目
    pub fn remove_at(&mut self, index: usize) -> Result<Item, StagingError> {
        if index >= self.items.len() {
            return Err(StagingError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// 原位替换指定下标的条目
    ///
    /// 新 sku 与"其他"下标的条目冲突则拒绝；
    /// 与本下标自身相同（不改 sku 重新保存）必须成功
    pub fn edit_at(&mut self, index: usize, new_item: Item) -> Result<(), StagingError> {
        if index >= self.items.len() {
            return Err(StagingError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        if self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.sku == new_item.sku)
        {
            return Err(StagingError::DuplicateSku { sku: new_item.sku });
        }
        self.items[index] = new_item;
        Ok(())
    }

    /// 清空集合；总是成功
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// 只读视图（输入顺序）
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
