// ==========================================
// 工廠材數比較系統 - 設定層錯誤類型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 設定層錯誤類型
///
/// 驗證失敗一律在邊界拒絕，呼叫端保留先前有效狀態
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("無效的比例設定: upper={upper}, lower={lower}（必須滿足 upper > lower > 0）")]
    InvalidThresholds { upper: f64, lower: f64 },

    #[error("無效的來源路徑: {0}")]
    InvalidPath(String),

    #[error("設定檔讀寫失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("設定檔格式錯誤: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result 類型別名
pub type SettingsResult<T> = Result<T, SettingsError>;
