// ==========================================
// 工廠材數比較系統 - SQLite 連線初始化
// ==========================================
// 目標:
// - 統一所有 Connection::open 的 PRAGMA 行為
// - 統一 busy_timeout，減少偶發 busy 錯誤
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 預設 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 連線的統一 PRAGMA
///
/// 說明:
/// - foreign_keys 需要「每個連線」單獨開啟
/// - busy_timeout 需要「每個連線」單獨配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打開 SQLite 連線並套用統一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}
