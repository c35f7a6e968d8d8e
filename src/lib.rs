// ==========================================
// 工廠材數比較系統 - 核心庫
// ==========================================
// 技術棧: Rust + SQLite
// 系統定位: 訂單分配決策支持（人工最終控制權）
// ==========================================

// 初始化國際化系統
rust_i18n::i18n!("locales", fallback = "zh-TW");

// ==========================================
// 模組聲明
// ==========================================

// 領域層 - 實體與類型
pub mod domain;

// 資料倉儲層 - 資料訪問
pub mod repository;

// 引擎層 - 業務規則
pub mod engine;

// 匯入層 - 外部資料（Excel 預估訂單）
pub mod importer;

// 設定層 - 系統設定
pub mod config;

// 匯出層 - 報表輸出
pub mod export;

// 資料庫基礎設施（連線初始化/PRAGMA 統一）
pub mod db;

// 日誌系統
pub mod logging;

// 國際化
pub mod i18n;

// 應用層 - 互動選單
pub mod app;

// ==========================================
// 重導出核心類型
// ==========================================

// 領域類型
pub use domain::types::{Factory, Recommendation};

// 領域實體
pub use domain::{
    EstimatedOrder, FactoryWeekTotal, ProductionRecord, ReportRow, SuggestedRange, WeekPeriod,
};

// 引擎
pub use engine::{
    AllocationAdvice, AllocationEngine, EstimateMerger, EstimateTotals, ReportAssembler,
    VolumeAggregator, WeeklyVolumes,
};

// 設定
pub use config::{CapacityLimits, RatioThresholds, SettingsError, SettingsStore, SourcePathStore};

// ==========================================
// 常量定義
// ==========================================

// 系統版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系統名稱
pub const APP_NAME: &str = "工廠材數比較系統";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
