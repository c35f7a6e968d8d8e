// ==========================================
// 工廠材數比較系統 - 資料倉儲層
// ==========================================
// 職責: SQLite 資料訪問（生產記錄/預估訂單）
// 紅線: 型別轉換在匯入邊界完成一次，
//       引擎層只見強型別記錄
// ==========================================

pub mod error;
pub mod estimate_repo;
pub mod production_repo;

// 重導出核心類型
pub use error::{RepositoryError, RepositoryResult};
pub use estimate_repo::EstimatedOrderRepository;
pub use production_repo::ProductionRecordRepository;

use chrono::NaiveDate;
use rusqlite::types::Value;

// ==========================================
// 來源值轉換輔助
// ==========================================
// 來源欄位可能以 TEXT/REAL/INTEGER 混存，
// 在此統一收斂為強型別，缺失或不可解析回傳 None

/// 將來源儲存格轉為 f64
pub(crate) fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Real(r) => Some(*r),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// 將來源儲存格轉為非空字串
pub(crate) fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(r) => Some(r.to_string()),
        _ => None,
    }
}

/// 將來源儲存格轉為日期
///
/// 接受 "yyyy-mm-dd"、"yyyy/mm/dd" 以及帶時間部分的字串
/// （只取前 10 個字元）
pub(crate) fn value_to_date(value: &Value) -> Option<NaiveDate> {
    let text = match value {
        Value::Text(s) => s.trim(),
        _ => return None,
    };

    // get() 避免在非 ASCII 內容的字元中間切斷
    let date_part = if text.len() > 10 {
        text.get(..10).unwrap_or(text)
    } else {
        text
    };

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y/%m/%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_f64_accepts_mixed_storage() {
        assert_eq!(value_to_f64(&Value::Integer(120)), Some(120.0));
        assert_eq!(value_to_f64(&Value::Real(31.25)), Some(31.25));
        assert_eq!(value_to_f64(&Value::Text(" 88.5 ".into())), Some(88.5));
        assert_eq!(value_to_f64(&Value::Text("abc".into())), None);
        assert_eq!(value_to_f64(&Value::Null), None);
    }

    #[test]
    fn test_value_to_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(value_to_date(&Value::Text("2025-03-05".into())), Some(expected));
        assert_eq!(value_to_date(&Value::Text("2025/03/05".into())), Some(expected));
        assert_eq!(
            value_to_date(&Value::Text("2025-03-05 14:30:00".into())),
            Some(expected)
        );
        assert_eq!(value_to_date(&Value::Text("not-a-date".into())), None);
        assert_eq!(value_to_date(&Value::Text("這不是一個日期字串".into())), None);
        assert_eq!(value_to_date(&Value::Null), None);
    }

    #[test]
    fn test_value_to_string_trims_and_filters_empty() {
        assert_eq!(value_to_string(&Value::Text("  A01 ".into())), Some("A01".into()));
        assert_eq!(value_to_string(&Value::Text("   ".into())), None);
        assert_eq!(value_to_string(&Value::Integer(7)), Some("7".into()));
    }
}
