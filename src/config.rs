// ==========================================
// 库存管理系统 - 服务配置
// ==========================================
// 职责: 从环境变量读取服务端配置，提供默认数据库路径
// ==========================================

use std::path::PathBuf;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 5000;

/// 服务端配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听端口
    pub port: u16,
    /// SQLite 数据库路径（":memory:" 表示内存库）
    pub db_path: String,
}

impl ServerConfig {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    /// - PORT: 监听端口（默认: 5000）
    /// - INVENTORY_DB: 数据库路径（默认: 用户数据目录下的 inventory.db）
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let db_path = std::env::var("INVENTORY_DB")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(get_default_db_path);

        Self { port, db_path }
    }
}

/// 获取默认数据库路径
///
/// 优先使用用户数据目录，拿不到时回退为当前目录下的文件
pub fn get_default_db_path() -> String {
    let mut path = PathBuf::from("./inventory_manager.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("inventory-manager");
        // 目录创建失败时保留回退路径
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("inventory.db");
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_not_empty() {
        assert!(!get_default_db_path().is_empty());
    }
}
