// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、路由装配、条目构造
// ==========================================
#![allow(dead_code)]

use std::error::Error;
use std::sync::{Arc, Mutex};

use axum::Router;
use rusqlite::Connection;
use tempfile::NamedTempFile;

use inventory_manager::app::{build_router, AppState};
use inventory_manager::db::init_schema;
use inventory_manager::domain::item::Item;
use inventory_manager::repository::InventoryRepository;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 基于内存库创建测试仓储
pub fn create_memory_repo() -> InventoryRepository {
    let conn = Connection::open_in_memory().expect("打开内存库失败");
    init_schema(&conn).expect("建表失败");
    InventoryRepository::from_connection(Arc::new(Mutex::new(conn)))
}

/// 基于内存库装配测试路由
pub fn create_test_router() -> Router {
    let state = AppState::from_repository(Arc::new(create_memory_repo()));
    build_router(state)
}

/// 构造测试条目
pub fn item(sku: &str, quantity: i64) -> Item {
    Item {
        quantity,
        sku: sku.to_string(),
        description: format!("desc-{sku}"),
        store: "Main".to_string(),
    }
}
