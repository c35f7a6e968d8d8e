// ==========================================
// 工廠材數比較系統 - 領域模型層
// ==========================================
// 職責: 定義領域實體、類型、週期計算
// 紅線: 不含資料訪問邏輯，不含引擎邏輯
// ==========================================

pub mod period;
pub mod record;
pub mod report;
pub mod types;

// 重導出核心類型
pub use period::WeekPeriod;
pub use record::{EstimatedOrder, ProductionRecord};
pub use report::{FactoryWeekTotal, ReportRow, SuggestedRange};
pub use types::{Factory, Recommendation};
