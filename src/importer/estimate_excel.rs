// ==========================================
// 工廠材數比較系統 - 預估訂單 Excel 匯入
// ==========================================
// 支援: .xlsx / .xls
// 佈局: 與 SQLite 來源相同的廠別分頁
//       「彰化查詢」/「台南查詢」，首列為表頭
// ==========================================
// 缺少某廠分頁時記 warn 後跳過（該廠預估為零），
// 整本都缺才屬於來源選錯檔案，仍是有效零預估狀態。
// ==========================================

use crate::domain::record::EstimatedOrder;
use crate::domain::types::Factory;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use chrono::{Duration, NaiveDate};
use std::path::Path;
use tracing::instrument;

/// 廠別分頁對照（工作表名 → 工廠）
const FACTORY_SHEETS: [(&str, Factory); 2] = [
    ("彰化查詢", Factory::Changhua),
    ("台南查詢", Factory::Tainan),
];

// Excel 序號日期的紀元（1900 日期系統，含閏年錯誤補償）
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

// ==========================================
// EstimateExcelImporter - 預估訂單 Excel 匯入器
// ==========================================
pub struct EstimateExcelImporter;

impl EstimateExcelImporter {
    pub fn new() -> Self {
        Self
    }

    /// 判斷路徑是否為 Excel 副檔名
    pub fn is_excel_path(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("xlsx") | Some("xls")
        )
    }

    /// 載入兩廠全部預估訂單
    #[instrument(skip(self))]
    pub fn load(&self, path: &Path) -> ImportResult<Vec<EstimatedOrder>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        if !Self::is_excel_path(path) {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string();
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 依檔案格式自動選擇解析器（.xlsx / .xls）
        let mut workbook =
            open_workbook_auto(path).map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut orders = Vec::new();
        for (sheet, factory) in FACTORY_SHEETS {
            match self.load_sheet(&mut workbook, sheet, factory)? {
                Some(sheet_orders) => orders.extend(sheet_orders),
                None => {
                    tracing::warn!(sheet, "找不到廠別分頁，該廠預估材數以 0 計");
                }
            }
        }

        tracing::info!(count = orders.len(), "預估訂單 Excel 載入完成");
        Ok(orders)
    }

    /// 載入單一廠別分頁；分頁不存在回傳 None
    fn load_sheet<R>(
        &self,
        workbook: &mut Sheets<R>,
        sheet: &str,
        factory: Factory,
    ) -> ImportResult<Option<Vec<EstimatedOrder>>>
    where
        R: std::io::Read + std::io::Seek,
    {
        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Ok(None);
        }

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = match rows.next() {
            Some(row) => row,
            None => return Ok(Some(Vec::new())), // 空分頁 = 零預估
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();
        let find = |name: &str| headers.iter().position(|h| h == name);

        let date_idx = find("預計出貨日").ok_or_else(|| ImportError::MissingColumn {
            sheet: sheet.to_string(),
            column: "預計出貨日".to_string(),
        })?;
        let volume_idx = find("預估材數").ok_or_else(|| ImportError::MissingColumn {
            sheet: sheet.to_string(),
            column: "預估材數".to_string(),
        })?;
        let store_idx = find("門市");
        let store_code_idx = find("門市代號");
        let note_idx = find("備註");

        let mut orders = Vec::new();
        let mut skipped = 0usize;

        for row in rows {
            // 跳過完全空白的列
            if row.iter().all(|cell| matches!(cell, Data::Empty)) {
                continue;
            }

            let date = match row.get(date_idx).and_then(cell_to_date) {
                Some(d) => d,
                None => {
                    skipped += 1;
                    continue;
                }
            };
            let estimated_volume = match row.get(volume_idx).and_then(cell_to_f64) {
                Some(v) => v,
                None => {
                    skipped += 1;
                    continue;
                }
            };

            orders.push(EstimatedOrder {
                date,
                factory,
                store_name: store_idx
                    .and_then(|i| row.get(i))
                    .and_then(cell_to_string)
                    .unwrap_or_default(),
                store_code: store_code_idx.and_then(|i| row.get(i)).and_then(cell_to_string),
                estimated_volume,
                note: note_idx.and_then(|i| row.get(i)).and_then(cell_to_string),
            });
        }

        if skipped > 0 {
            tracing::warn!(sheet, count = skipped, "剔除日期/材數不可解析的預估訂單");
        }

        Ok(Some(orders))
    }
}

impl Default for EstimateExcelImporter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 儲存格轉換輔助
// ==========================================

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        other => {
            let text = other.to_string().trim().to_string();
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
    }
}

fn cell_to_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        // Excel 序號日期（天數，小數部分為時間）
        Data::DateTime(dt) => {
            let (y, m, d) = EXCEL_EPOCH;
            let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(epoch + Duration::days(dt.as_f64() as i64))
        }
        Data::DateTimeIso(s) => parse_date_text(s),
        Data::String(s) => parse_date_text(s),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    // get() 避免在非 ASCII 內容的字元中間切斷
    let date_part = if trimmed.len() > 10 {
        trimmed.get(..10).unwrap_or(trimmed)
    } else {
        trimmed
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y/%m/%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_date_from_text() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(cell_to_date(&Data::String("2025/03/05".into())), Some(expected));
        assert_eq!(
            cell_to_date(&Data::String("2025-03-05T00:00:00".into())),
            Some(expected)
        );
        assert_eq!(cell_to_date(&Data::String("門市".into())), None);
    }

    #[test]
    fn test_cell_to_f64() {
        assert_eq!(cell_to_f64(&Data::Float(31.25)), Some(31.25));
        assert_eq!(cell_to_f64(&Data::Int(1000)), Some(1000.0));
        assert_eq!(cell_to_f64(&Data::String("88.5".into())), Some(88.5));
        assert_eq!(cell_to_f64(&Data::Empty), None);
    }

    #[test]
    fn test_is_excel_path() {
        assert!(EstimateExcelImporter::is_excel_path(Path::new("a.xlsx")));
        assert!(EstimateExcelImporter::is_excel_path(Path::new("a.xls")));
        assert!(!EstimateExcelImporter::is_excel_path(Path::new("a.db")));
    }
}
