// ==========================================
// 库存管理系统 - CSV 解析器
// ==========================================
// 契约:
// - 第一行是表头，无条件丢弃（不校验列名/列序，属已知缺口：
//   表头错位会静默产生错读数据）
// - 其余非空行按逗号切成 4 个定位字段: quantity,sku,description,store
// - 不支持引号/转义（值里带逗号会使该行字段数变为 5 而被拒绝）
// - 末尾空行跳过，不会被当作空记录解析
// ==========================================

use csv::ReaderBuilder;
use serde_json::json;

use crate::domain::item::Item;
use crate::domain::validator::validate;
use crate::importer::error::{ImportError, RowError, RowIssue};

/// 解析 CSV 文本为已校验的条目序列
///
/// 一次性消费整段输入；任何问题行都会使整次解析失败，
/// 并在错误里聚合报告所有问题行（带行号）
pub fn parse_csv(text: &str) -> Result<Vec<Item>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true) // 表头行直接丢弃
        .flexible(true)    // 字段数自行检查，不与表头比对
        .quoting(false)    // 定位切分，无引号语义
        .from_reader(text.as_bytes());

    let mut items = Vec::new();
    let mut errors = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // 表头占第 1 行；空行被 reader 跳过时以 position 还原真实行号
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        let fields: Vec<&str> = record.iter().collect();

        // 跳过完全空白的行
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        if fields.len() != 4 {
            errors.push(RowError {
                line,
                issue: RowIssue::FieldCount(fields.len()),
            });
            continue;
        }

        // 四个定位字段全部以字符串进入校验器，数量由校验器强转
        let candidate = json!({
            "quantity": fields[0],
            "sku": fields[1],
            "description": fields[2],
            "store": fields[3],
        });

        match validate(&candidate) {
            Ok(item) => items.push(item),
            Err(e) => errors.push(RowError {
                line,
                issue: RowIssue::Validation(e),
            }),
        }
    }

    if !errors.is_empty() {
        return Err(ImportError::InvalidRows(errors));
    }

    Ok(items)
}
