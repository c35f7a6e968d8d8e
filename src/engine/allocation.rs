// ==========================================
// 工廠材數比較系統 - 訂單分配判定引擎
// ==========================================
// 職責: 合計材數比例 → 分配建議 + 建議移轉量區間
// ==========================================
// 比例 = 彰化合計 / 台南合計；台南為 0 時比例
// 不存在（不以無窮大或 0 代替）。
// 門檻判定採嚴格不等式: 比例恰等於上/下限視為正常。
// 引擎以門檻快照建構——之後變更設定不影響
// 已由本實例生成的結果。
// ==========================================

use crate::config::settings::RatioThresholds;
use crate::domain::report::SuggestedRange;
use crate::domain::types::Recommendation;

// ==========================================
// AllocationAdvice - 單週判定結果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationAdvice {
    pub ratio: Option<f64>,                      // 合計材數比例
    pub recommendation: Recommendation,          // 分配建議
    pub suggested_range: Option<SuggestedRange>, // 建議移轉量（僅傾斜時）
}

// ==========================================
// AllocationEngine - 訂單分配判定引擎
// ==========================================
pub struct AllocationEngine {
    thresholds: RatioThresholds,
}

impl AllocationEngine {
    /// 以門檻快照建構
    pub fn new(thresholds: RatioThresholds) -> Self {
        Self { thresholds }
    }

    /// 合計材數比例（彰化 / 台南）；台南為 0 時 None
    pub fn ratio(combined_changhua: f64, combined_tainan: f64) -> Option<f64> {
        if combined_tainan == 0.0 {
            None
        } else {
            Some(combined_changhua / combined_tainan)
        }
    }

    /// 判定單週分配建議
    ///
    /// 輸入為兩廠合計材數（實際 + 預估）
    pub fn advise(&self, combined_changhua: f64, combined_tainan: f64) -> AllocationAdvice {
        let ratio = Self::ratio(combined_changhua, combined_tainan);

        let recommendation = match ratio {
            None => Recommendation::NotComputable,
            Some(r) if r > self.thresholds.upper() => Recommendation::AllocateToTainan,
            Some(r) if r < self.thresholds.lower() => Recommendation::AllocateToChanghua,
            Some(_) => Recommendation::Balanced,
        };

        // 移轉量區間只在傾斜建議時有意義:
        // 移轉後比例應落在 [下限, 上限] 兩端
        let suggested_range = match recommendation {
            Recommendation::AllocateToTainan => {
                Some(self.range_toward_tainan(combined_changhua, combined_tainan))
            }
            Recommendation::AllocateToChanghua => {
                Some(self.range_toward_changhua(combined_changhua, combined_tainan))
            }
            Recommendation::Balanced | Recommendation::NotComputable => None,
        };

        AllocationAdvice {
            ratio,
            recommendation,
            suggested_range,
        }
    }

    /// 建議移轉到台南廠的量:
    /// 界 = total/(1+門檻) − 台南合計
    fn range_toward_tainan(&self, changhua: f64, tainan: f64) -> SuggestedRange {
        let total = changhua + tainan;
        let at_upper = total / (1.0 + self.thresholds.upper()) - tainan;
        let at_lower = total / (1.0 + self.thresholds.lower()) - tainan;
        SuggestedRange::from_bounds(at_upper, at_lower)
    }

    /// 建議移轉到彰化廠的量:
    /// 界 = total·門檻/(1+門檻) − 彰化合計
    fn range_toward_changhua(&self, changhua: f64, tainan: f64) -> SuggestedRange {
        let total = changhua + tainan;
        let upper = self.thresholds.upper();
        let lower = self.thresholds.lower();
        let at_upper = total / (1.0 + upper) * upper - changhua;
        let at_lower = total / (1.0 + lower) * lower - changhua;
        SuggestedRange::from_bounds(at_upper, at_lower)
    }
}
