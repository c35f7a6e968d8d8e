// ==========================================
// 工廠材數比較系統 - 倉儲層錯誤類型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================
// 連線/查詢失敗向上層呈報後，會期視為「無資料可用」，
// 不重試、不觸碰先前載入的記憶體狀態。
// ==========================================

use thiserror::Error;

/// 倉儲層錯誤類型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 連線錯誤 =====
    #[error("資料庫檔案不存在: {0}")]
    DatabaseNotFound(String),

    #[error("資料庫連線失敗: {0}")]
    ConnectionError(String),

    // ===== 查詢錯誤 =====
    #[error("資料庫查詢失敗: {0}")]
    QueryError(String),

    #[error("資料表不存在: {0}")]
    TableNotFound(String),

    #[error("必要欄位缺失: 表={table}, 欄位={column}")]
    MissingColumn { table: String, column: String },

}

// 實現 From<rusqlite::Error>
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("no such table") {
                    RepositoryError::TableNotFound(msg)
                } else {
                    RepositoryError::QueryError(msg)
                }
            }
            _ => RepositoryError::QueryError(err.to_string()),
        }
    }
}

/// Result 類型別名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
