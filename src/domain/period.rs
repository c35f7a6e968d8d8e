// ==========================================
// 工廠材數比較系統 - 週期計算
// ==========================================
// 職責: 日期 → 所屬日曆週（週一至週日）
// 紅線: 純函數、全域定義——任何有效日期對應唯一一週
// ==========================================
// 標籤格式 "yyyy/mm/dd-yyyy/mm/dd" 為全系統
// 合併實際/預估資料的正式連接鍵；
// 兩週期相等定義為標籤相等。
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// WeekPeriod - 日曆週區間
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekPeriod {
    start: NaiveDate, // 週起始日（週一）
    end: NaiveDate,   // 週結束日（週日）
}

impl WeekPeriod {
    /// 取得包含指定日期的日曆週
    pub fn containing(date: NaiveDate) -> WeekPeriod {
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        WeekPeriod {
            start: monday,
            end: monday + Duration::days(6),
        }
    }

    /// 週起始日（週一）
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// 週結束日（週日）
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 正式連接鍵 "yyyy/mm/dd-yyyy/mm/dd"
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            self.start.format("%Y/%m/%d"),
            self.end.format("%Y/%m/%d")
        )
    }

    /// 顯示用短標籤 "mm/dd-mm/dd"
    pub fn short_label(&self) -> String {
        format!(
            "{}-{}",
            self.start.format("%m/%d"),
            self.end.format("%m/%d")
        )
    }

    /// 判斷日期是否落在本週（含邊界）
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for WeekPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_is_always_monday() {
        // 連續掃過兩個月，每一天的週起始日都必須是週一且包含該日
        let mut d = date(2025, 2, 1);
        while d <= date(2025, 3, 31) {
            let period = WeekPeriod::containing(d);
            assert_eq!(period.start().weekday(), Weekday::Mon);
            assert!(period.contains(d), "period {} should contain {}", period, d);
            assert_eq!(period.end() - period.start(), Duration::days(6));
            d += Duration::days(1);
        }
    }

    #[test]
    fn test_monday_and_sunday_share_a_week() {
        // 2025/03/03 是週一，2025/03/09 是週日
        let monday = WeekPeriod::containing(date(2025, 3, 3));
        let sunday = WeekPeriod::containing(date(2025, 3, 9));
        assert_eq!(monday, sunday);
        assert_eq!(monday.label(), "2025/03/03-2025/03/09");
    }

    #[test]
    fn test_year_boundary_week() {
        // 2024/12/30（週一）所在週跨入 2025 年
        let period = WeekPeriod::containing(date(2025, 1, 1));
        assert_eq!(period.start(), date(2024, 12, 30));
        assert_eq!(period.end(), date(2025, 1, 5));
        assert_eq!(period.label(), "2024/12/30-2025/01/05");
    }

    #[test]
    fn test_short_label() {
        let period = WeekPeriod::containing(date(2025, 3, 5));
        assert_eq!(period.short_label(), "03/03-03/09");
    }
}
