// ==========================================
// 工廠材數比較系統 - 匯入層
// ==========================================
// 職責: 從 Excel 檔案載入預估訂單
// （SQLite 來源走 repository::estimate_repo）
// ==========================================

pub mod error;
pub mod estimate_excel;

// 重導出核心類型
pub use error::{ImportError, ImportResult};
pub use estimate_excel::EstimateExcelImporter;
