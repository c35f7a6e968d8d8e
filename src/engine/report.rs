// ==========================================
// 工廠材數比較系統 - 比較報表組裝引擎
// ==========================================
// 職責: 聚合結果 + 預估訂單 + 分配判定 → 報表列
// ==========================================
// 週期取兩廠聚合資料的聯集——只有單廠有資料的週
// 也要出現，另一廠實際/預估/合計一律以 0 填充。
// 排序按週起始日升冪（標籤字典序跨年會排錯）。
// 合計列由匯出端附加，這裡永遠輸出同構列。
// ==========================================

use crate::domain::record::EstimatedOrder;
use crate::domain::report::{FactoryWeekTotal, ReportRow};
use crate::domain::types::Factory;
use crate::engine::aggregator::WeeklyVolumes;
use crate::engine::allocation::AllocationEngine;
use crate::engine::estimate_merger::EstimateMerger;
use tracing::instrument;

// ==========================================
// ReportAssembler - 比較報表組裝引擎
// ==========================================
pub struct ReportAssembler {
    merger: EstimateMerger,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self {
            merger: EstimateMerger::new(),
        }
    }

    /// 組裝按時間序排列的比較報表
    #[instrument(skip_all, fields(estimates = estimates.len()))]
    pub fn assemble(
        &self,
        volumes: &WeeklyVolumes,
        estimates: &[EstimatedOrder],
        engine: &AllocationEngine,
    ) -> Vec<ReportRow> {
        let mut rows = Vec::new();

        for period in volumes.periods_chronological() {
            let label = period.label();
            let estimated = self.merger.sum_for_period(estimates, &period);

            let changhua = FactoryWeekTotal::new(
                volumes.volume_of(Factory::Changhua, &label),
                estimated.of(Factory::Changhua),
            );
            let tainan = FactoryWeekTotal::new(
                volumes.volume_of(Factory::Tainan, &label),
                estimated.of(Factory::Tainan),
            );

            let advice = engine.advise(changhua.combined(), tainan.combined());

            rows.push(ReportRow {
                period,
                changhua,
                tainan,
                combined_difference: changhua.combined() - tainan.combined(),
                combined_ratio: advice.ratio,
                recommendation: advice.recommendation,
                suggested_range: advice.suggested_range,
            });
        }

        rows
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}
