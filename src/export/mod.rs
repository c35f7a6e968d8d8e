// ==========================================
// 工廠材數比較系統 - 匯出層
// ==========================================
// 職責: 報表輸出（主控台表格 / CSV 檔案）
// 紅線: 千分位等顯示格式只在這一層套用，
//       管線內部全程保持數值型別
// ==========================================

pub mod csv_exporter;
pub mod table;

// 重導出核心類型
pub use csv_exporter::CsvReportExporter;
pub use table::ReportTablePrinter;

use thiserror::Error;

/// 匯出層錯誤類型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("報表寫入失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 輸出失敗: {0}")]
    Csv(#[from] csv::Error),
}

/// Result 類型別名
pub type ExportResult<T> = Result<T, ExportError>;
