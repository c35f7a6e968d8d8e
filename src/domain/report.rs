// ==========================================
// 工廠材數比較系統 - 報表領域模型
// ==========================================
// 職責: 每週比較結果的同構資料列
// 紅線: 全程保持數值型別；千分位等顯示格式
//       只在輸出邊界套用（export 層）
// ==========================================

use crate::domain::period::WeekPeriod;
use crate::domain::types::Recommendation;
use serde::{Deserialize, Serialize};

// ==========================================
// FactoryWeekTotal - 單廠單週材數合計
// ==========================================
// 實際/預估缺值一律以 0 表示，不以缺鍵表示
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactoryWeekTotal {
    pub actual: f64,    // 實際材數（生產記錄彙總）
    pub estimated: f64, // 預估材數（預估訂單彙總）
}

impl FactoryWeekTotal {
    pub fn new(actual: f64, estimated: f64) -> Self {
        Self { actual, estimated }
    }

    /// 合計材數 = 實際 + 預估
    pub fn combined(&self) -> f64 {
        self.actual + self.estimated
    }
}

// ==========================================
// SuggestedRange - 建議移轉量區間
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRange {
    pub low: f64,
    pub high: f64,
}

impl SuggestedRange {
    /// 以兩個門檻界建立區間，保證 low <= high
    pub fn from_bounds(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}

// ==========================================
// ReportRow - 比較報表資料列
// ==========================================
// 每個日曆週一列；兩廠欄位齊備（缺資料以 0 填充）
// 合計列由匯出端附加，組裝端輸出永遠是同構列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub period: WeekPeriod,             // 日期區間
    pub changhua: FactoryWeekTotal,     // 彰化廠材數
    pub tainan: FactoryWeekTotal,       // 台南廠材數
    pub combined_difference: f64,       // 合計材數差異（彰化 − 台南）
    pub combined_ratio: Option<f64>,    // 合計材數比例（台南為 0 時 None）
    pub recommendation: Recommendation, // 訂單分配建議
    pub suggested_range: Option<SuggestedRange>, // 建議分配量區間
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_is_actual_plus_estimated() {
        let total = FactoryWeekTotal::new(1200.0, 300.0);
        assert_eq!(total.combined(), 1500.0);
    }

    #[test]
    fn test_suggested_range_is_ordered() {
        let range = SuggestedRange::from_bounds(178.5, 31.25);
        assert!(range.low <= range.high);
        assert_eq!(range.low, 31.25);
        assert_eq!(range.high, 178.5);
    }
}
