// ==========================================
// 工廠材數比較系統 - 引擎層
// ==========================================
// 職責: 實現比較/分配業務規則，不拼 SQL
// 紅線: 引擎只見強型別記錄；所有建議必須可解釋
//       （比例 + 門檻 + 區間一併輸出）
// ==========================================

pub mod aggregator;
pub mod allocation;
pub mod estimate_merger;
pub mod report;

// 重導出核心引擎
pub use aggregator::{VolumeAggregator, WeeklyVolumes};
pub use allocation::{AllocationAdvice, AllocationEngine};
pub use estimate_merger::{EstimateMerger, EstimateTotals};
pub use report::ReportAssembler;
