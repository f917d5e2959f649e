// ==========================================
// 库存管理系统 - 条目校验器
// ==========================================
// 职责: 将未定型的 JSON 记录校验/归一化为 Item
// 红线: 纯函数，无副作用；CSV 导入、暂存层、服务端路由共用，
//       保证两端对同一输入做出一致的接受/拒绝判定
// ==========================================

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

use crate::domain::item::Item;

/// SKU 格式: 两位字母 + 连字符 + 四位数字
const SKU_PATTERN: &str = r"^[A-Za-z]{2}-\d{4}$";

static SKU_REGEX: OnceLock<Regex> = OnceLock::new();

fn sku_regex() -> &'static Regex {
    SKU_REGEX.get_or_init(|| Regex::new(SKU_PATTERN).expect("SKU 正则模式非法"))
}

// ==========================================
// ValidationError - 校验错误
// ==========================================
/// 校验错误
///
/// 错误消息会原样出现在 HTTP 400 响应体与客户端提示里，使用英文
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 记录本身不是对象
    #[error("item must be a JSON object")]
    NotAnObject,

    /// 字段缺失或无法强转为整数（类型错误）
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    /// 字段缺失或不是字符串（类型错误）
    #[error("{field} must be a string")]
    InvalidString { field: &'static str },

    /// SKU 格式不符（格式错误）
    #[error("SKU must be in the format AA-0000")]
    SkuFormat,
}

/// 校验/归一化一条未定型记录
///
/// # 规则
/// - quantity: 接受整数、无小数部分的浮点数、可解析为整数的字符串（两端空白忽略）
/// - sku: 必须匹配 `^[A-Za-z]{2}-\d{4}$`
/// - description / store: 必须是字符串，允许为空串（无最小长度规则）
pub fn validate(candidate: &Value) -> Result<Item, ValidationError> {
    let obj = candidate
        .as_object()
        .ok_or(ValidationError::NotAnObject)?;

    let quantity = coerce_quantity(obj.get("quantity"))?;
    let sku = require_string(obj.get("sku"), "sku")?;
    if !sku_regex().is_match(&sku) {
        return Err(ValidationError::SkuFormat);
    }
    let description = require_string(obj.get("description"), "description")?;
    let store = require_string(obj.get("store"), "store")?;

    Ok(Item {
        quantity,
        sku,
        description,
        store,
    })
}

/// 数量强转: 字符串 → 整数，浮点 → 整数（仅限无小数部分）
fn coerce_quantity(value: Option<&Value>) -> Result<i64, ValidationError> {
    let err = ValidationError::InvalidNumber { field: "quantity" };

    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                // 1.0 之类的整值浮点可接受，真正的小数拒绝
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
                    _ => Err(err),
                }
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| err),
        _ => Err(err),
    }
}

fn require_string(
    value: Option<&Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::InvalidString { field }),
    }
}
