// ==========================================
// 工廠材數比較系統 - 設定層
// ==========================================
// 職責: 比例門檻/產能上限/來源路徑的平面 JSON 持久化
// 紅線: 讀取 fail-soft（損毀回退預設值），
//       寫入在每次成功變更後立即執行
// ==========================================

pub mod error;
pub mod paths;
pub mod settings;

// 重導出核心類型
pub use error::SettingsError;
pub use paths::SourcePathStore;
pub use settings::{
    CapacityLimits, RatioThresholds, SettingsStore, DEFAULT_LOWER_RATIO, DEFAULT_UPPER_RATIO,
};
