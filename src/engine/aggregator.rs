// ==========================================
// 工廠材數比較系統 - 材數聚合引擎
// ==========================================
// 職責: 生產記錄 → (廠別, 週標籤) 材數合計
// 輸入: 已過濾為「生產中」且本週以後的記錄
// ==========================================
// 邊界: 空輸入產生空映射（不是錯誤）；
// 某廠某週無記錄時下游查詢回傳 0，不回缺鍵。
// 連接鍵使用週標籤字串，排序使用週起始日。
// ==========================================

use crate::domain::period::WeekPeriod;
use crate::domain::record::ProductionRecord;
use crate::domain::types::Factory;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::instrument;

// ==========================================
// WeeklyVolumes - 聚合結果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct WeeklyVolumes {
    /// (廠別, 週標籤) → 材數合計
    totals: HashMap<(Factory, String), f64>,
    /// 週標籤 → 週起始日（供下游按時間序排序）
    week_starts: HashMap<String, NaiveDate>,
}

impl WeeklyVolumes {
    pub fn is_empty(&self) -> bool {
        self.week_starts.is_empty()
    }

    /// 查詢某廠某週材數；無記錄回傳 0
    pub fn volume_of(&self, factory: Factory, label: &str) -> f64 {
        self.totals
            .get(&(factory, label.to_string()))
            .copied()
            .unwrap_or(0.0)
    }

    /// 兩廠聯集的全部週期，按週起始日升冪
    ///
    /// 標籤的月日格式跨年不可按字典序排序，必須用日期
    pub fn periods_chronological(&self) -> Vec<WeekPeriod> {
        let mut starts: Vec<NaiveDate> = self.week_starts.values().copied().collect();
        starts.sort();
        starts
            .into_iter()
            .map(WeekPeriod::containing)
            .collect()
    }
}

// ==========================================
// VolumeAggregator - 材數聚合引擎
// ==========================================
pub struct VolumeAggregator;

impl VolumeAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 依 (廠別, 日曆週) 彙總材數
    #[instrument(skip_all, fields(count = records.len()))]
    pub fn aggregate(&self, records: &[ProductionRecord]) -> WeeklyVolumes {
        let mut volumes = WeeklyVolumes::default();

        for record in records {
            let period = WeekPeriod::containing(record.ship_date);
            let label = period.label();

            *volumes
                .totals
                .entry((record.factory, label.clone()))
                .or_insert(0.0) += record.volume;
            volumes.week_starts.entry(label).or_insert(period.start());
        }

        volumes
    }
}

impl Default for VolumeAggregator {
    fn default() -> Self {
        Self::new()
    }
}
