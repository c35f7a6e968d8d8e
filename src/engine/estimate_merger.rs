// ==========================================
// 工廠材數比較系統 - 預估訂單合併引擎
// ==========================================
// 職責: 指定週期內的預估訂單按廠彙總
// ==========================================
// 邊界: 未載入任何預估訂單時兩廠皆回 0，
//       與「有載入但無命中」不做區分；
// 工廠識別在匯入邊界已驗證，進到這裡的
// 訂單一定有明確廠別。
// ==========================================

use crate::domain::period::WeekPeriod;
use crate::domain::record::EstimatedOrder;
use crate::domain::types::Factory;

// ==========================================
// EstimateTotals - 單週預估材數合計
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimateTotals {
    pub changhua: f64, // 彰化廠預估材數
    pub tainan: f64,   // 台南廠預估材數
}

impl EstimateTotals {
    /// 依廠別取合計
    pub fn of(&self, factory: Factory) -> f64 {
        match factory {
            Factory::Changhua => self.changhua,
            Factory::Tainan => self.tainan,
        }
    }
}

// ==========================================
// EstimateMerger - 預估訂單合併引擎
// ==========================================
pub struct EstimateMerger;

impl EstimateMerger {
    pub fn new() -> Self {
        Self
    }

    /// 彙總落在 [週一, 週日]（含邊界）內的預估材數
    ///
    /// 純函數: 相同輸入重複呼叫結果一致
    pub fn sum_for_period(&self, orders: &[EstimatedOrder], period: &WeekPeriod) -> EstimateTotals {
        let mut totals = EstimateTotals::default();

        for order in orders {
            if !period.contains(order.date) {
                continue;
            }
            match order.factory {
                Factory::Changhua => totals.changhua += order.estimated_volume,
                Factory::Tainan => totals.tainan += order.estimated_volume,
            }
        }

        totals
    }
}

impl Default for EstimateMerger {
    fn default() -> Self {
        Self::new()
    }
}
