// ==========================================
// 工廠材數比較系統 - CSV 報表匯出
// ==========================================
// 職責: 報表列 → CSV 檔案（UTF-8）
// ==========================================
// 合計列在這裡附加——組裝端輸出永遠是同構週列，
// 彙總責任屬於匯出端。
// 數值欄寫入原始數值；比例固定兩位小數。
// ==========================================

use crate::domain::report::ReportRow;
use crate::engine::allocation::AllocationEngine;
use crate::export::table::{format_ratio, format_suggested_amount};
use crate::export::{ExportError, ExportResult};
use chrono::NaiveDate;
use std::path::Path;
use tracing::instrument;

// ==========================================
// CsvReportExporter - CSV 報表匯出器
// ==========================================
pub struct CsvReportExporter;

impl CsvReportExporter {
    /// CSV 表頭（與主控台表格同欄序，日期區間用完整標籤）
    const HEADERS: [&'static str; 11] = [
        "日期區間",
        "彰化廠材數",
        "台南廠材數",
        "彰化廠預估材數",
        "台南廠預估材數",
        "彰化廠合計材數",
        "台南廠合計材數",
        "合計材數差異",
        "合計材數比例",
        "訂單分配建議",
        "建議分配量",
    ];

    pub fn new() -> Self {
        Self
    }

    /// 預設匯出檔名（含當日日期）
    pub fn default_filename(today: NaiveDate) -> String {
        format!("Factory_Comparison_{}.csv", today.format("%Y%m%d"))
    }

    /// 匯出報表（尾端附加「合計」列）
    #[instrument(skip(self, rows), fields(rows = rows.len(), path = %path.display()))]
    pub fn export(&self, rows: &[ReportRow], path: &Path) -> ExportResult<()> {
        let mut writer = csv::Writer::from_path(path).map_err(ExportError::from)?;

        writer.write_record(Self::HEADERS)?;

        for row in rows {
            writer.write_record([
                row.period.label(),
                format_number(row.changhua.actual),
                format_number(row.tainan.actual),
                format_number(row.changhua.estimated),
                format_number(row.tainan.estimated),
                format_number(row.changhua.combined()),
                format_number(row.tainan.combined()),
                format_number(row.combined_difference),
                format_ratio(row.combined_ratio),
                row.recommendation.to_string(),
                format_suggested_amount(row.recommendation, row.suggested_range),
            ])?;
        }

        writer.write_record(Self::total_record(rows))?;
        writer.flush()?;

        tracing::info!(path = %path.display(), "報表已匯出");
        Ok(())
    }

    /// 合計列: 各數值欄加總 + 以合計值重算的整體比例
    fn total_record(rows: &[ReportRow]) -> [String; 11] {
        let sum = |f: fn(&ReportRow) -> f64| rows.iter().map(f).sum::<f64>();

        let changhua_actual = sum(|r| r.changhua.actual);
        let tainan_actual = sum(|r| r.tainan.actual);
        let changhua_estimated = sum(|r| r.changhua.estimated);
        let tainan_estimated = sum(|r| r.tainan.estimated);
        let changhua_combined = sum(|r| r.changhua.combined());
        let tainan_combined = sum(|r| r.tainan.combined());
        let difference = sum(|r| r.combined_difference);

        let total_ratio = AllocationEngine::ratio(changhua_combined, tainan_combined);

        [
            "合計".to_string(),
            format_number(changhua_actual),
            format_number(tainan_actual),
            format_number(changhua_estimated),
            format_number(tainan_estimated),
            format_number(changhua_combined),
            format_number(tainan_combined),
            format_number(difference),
            format_ratio(total_ratio),
            "-".to_string(),
            "-".to_string(),
        ]
    }
}

impl Default for CsvReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 數值欄輸出: 整數值不帶小數點，其餘保留原值
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filename() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
        assert_eq!(
            CsvReportExporter::default_filename(today),
            "Factory_Comparison_20250313.csv"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(31.25), "31.25");
        assert_eq!(format_number(-250.0), "-250");
    }
}
