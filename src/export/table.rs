// ==========================================
// 工廠材數比較系統 - 主控台報表輸出
// ==========================================
// 職責: 報表列 → 等寬文字表格
// 格式: 欄寬依最大內容自動決定，全部靠左，
//       欄與欄之間 4 個空格；日期區間縮短為
//       mm/dd-mm/dd 顯示
// ==========================================

use crate::config::settings::CapacityLimits;
use crate::domain::report::{ReportRow, SuggestedRange};
use crate::domain::types::{Factory, Recommendation};

/// 欄間距（空格數）
const COLUMN_GAP: usize = 4;

// ==========================================
// 顯示格式化（僅限輸出邊界使用）
// ==========================================

/// 千分位整數格式（對齊 "{:,.0f}"）
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// 比例格式: 兩位小數，無法計算顯示 "-"
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}", r),
        None => "-".to_string(),
    }
}

/// 建議分配量格式
pub fn format_suggested_amount(
    recommendation: Recommendation,
    range: Option<SuggestedRange>,
) -> String {
    match (recommendation, range) {
        (Recommendation::AllocateToTainan, Some(r)) => format!(
            "建議分配到台南廠：{} ~ {} 材數",
            format_thousands(r.low),
            format_thousands(r.high)
        ),
        (Recommendation::AllocateToChanghua, Some(r)) => format!(
            "建議分配到彰化廠：{} ~ {} 材數",
            format_thousands(r.low),
            format_thousands(r.high)
        ),
        (Recommendation::Balanced, _) => "維持現有分配".to_string(),
        _ => "-".to_string(),
    }
}

// ==========================================
// ReportTablePrinter - 文字表格輸出
// ==========================================
pub struct ReportTablePrinter;

impl ReportTablePrinter {
    /// 表頭（固定欄順序，日期區間在最左）
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

    /// 渲染完整表格（含產能標註行）
    pub fn render(&self, rows: &[ReportRow], capacities: &CapacityLimits) -> String {
        let mut output = String::new();

        // 產能上限僅供對照顯示，不參與任何計算
        for factory in Factory::ALL {
            if let Some(capacity) = capacities.of(factory) {
                output.push_str(&format!(
                    "{}每週最大材數: {}\n",
                    factory.display_name(),
                    format_thousands(f64::from(capacity))
                ));
            }
        }

        let cells: Vec<Vec<String>> = rows.iter().map(|row| Self::row_cells(row)).collect();

        // 欄寬 = max(表頭, 各列內容)
        let mut widths: Vec<usize> = Self::HEADERS
            .iter()
            .map(|h| h.chars().count())
            .collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        output.push_str(&Self::render_line(
            &Self::HEADERS.map(|h| h.to_string()),
            &widths,
        ));
        for row in &cells {
            output.push_str(&Self::render_line(row, &widths));
        }

        output
    }

    fn row_cells(row: &ReportRow) -> Vec<String> {
        vec![
            row.period.short_label(),
            format_thousands(row.changhua.actual),
            format_thousands(row.tainan.actual),
            format_thousands(row.changhua.estimated),
            format_thousands(row.tainan.estimated),
            format_thousands(row.changhua.combined()),
            format_thousands(row.tainan.combined()),
            format_thousands(row.combined_difference),
            format_ratio(row.combined_ratio),
            row.recommendation.to_string(),
            format_suggested_amount(row.recommendation, row.suggested_range),
        ]
    }

    fn render_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            let text = cell.as_ref();
            if i > 0 {
                line.push_str(&" ".repeat(COLUMN_GAP));
            }
            line.push_str(text);
            let pad = widths[i].saturating_sub(text.chars().count());
            if i < cells.len() - 1 {
                line.push_str(&" ".repeat(pad));
            }
        }
        line.push('\n');
        line
    }
}

impl Default for ReportTablePrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1234567.4), "1,234,567");
        assert_eq!(format_thousands(-1200.0), "-1,200");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(Some(2.3)), "2.30");
        assert_eq!(format_ratio(None), "-");
    }

    #[test]
    fn test_format_suggested_amount_variants() {
        let range = SuggestedRange::from_bounds(31.25, 178.57);
        assert_eq!(
            format_suggested_amount(Recommendation::AllocateToTainan, Some(range)),
            "建議分配到台南廠：31 ~ 179 材數"
        );
        assert_eq!(
            format_suggested_amount(Recommendation::Balanced, None),
            "維持現有分配"
        );
        assert_eq!(
            format_suggested_amount(Recommendation::NotComputable, None),
            "-"
        );
    }
}
