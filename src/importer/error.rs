// ==========================================
// 工廠材數比較系統 - 匯入層錯誤類型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 匯入層錯誤類型
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("檔案不存在: {0}")]
    FileNotFound(String),

    #[error("不支援的檔案格式: {0}")]
    UnsupportedFormat(String),

    #[error("Excel 解析失敗: {0}")]
    ExcelParseError(String),

    #[error("必要欄位缺失: 工作表={sheet}, 欄位={column}")]
    MissingColumn { sheet: String, column: String },
}

/// Result 類型別名
pub type ImportResult<T> = Result<T, ImportError>;
