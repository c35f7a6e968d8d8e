// ==========================================
// 工廠材數比較系統 - 預估訂單倉儲
// ==========================================
// 來源: 預估訂單資料庫，兩張廠別查詢表
//       「彰化查詢」/「台南查詢」
// 欄位: 預計出貨日 / 門市 / 門市代號 / 預估材數 / 備註
//       （門市代號與備註為選填欄位，允許整欄缺失）
// ==========================================
// 工廠歸屬由表名判定；日期或材數不可解析的列
// 記 warn 後剔除，兩廠合計都不計入。
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::record::EstimatedOrder;
use crate::domain::types::Factory;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{value_to_date, value_to_f64, value_to_string};
use rusqlite::types::Value;
use rusqlite::Connection;
use std::path::Path;
use tracing::instrument;

/// 廠別查詢表對照（表名 → 工廠）
const FACTORY_TABLES: [(&str, Factory); 2] = [
    ("彰化查詢", Factory::Changhua),
    ("台南查詢", Factory::Tainan),
];

// ==========================================
// EstimatedOrderRepository - 預估訂單倉儲
// ==========================================
pub struct EstimatedOrderRepository {
    conn: Connection,
}

impl EstimatedOrderRepository {
    /// 開啟預估訂單資料庫
    pub fn open(db_path: &Path) -> RepositoryResult<Self> {
        if !db_path.exists() {
            return Err(RepositoryError::DatabaseNotFound(
                db_path.display().to_string(),
            ));
        }

        let conn = open_sqlite_connection(&db_path.display().to_string())
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;

        Ok(Self { conn })
    }

    /// 讀取兩廠全部預估訂單
    ///
    /// 空表是有效狀態（零預估），不是錯誤
    #[instrument(skip(self))]
    pub fn fetch_all(&self) -> RepositoryResult<Vec<EstimatedOrder>> {
        let mut orders = Vec::new();

        for (table, factory) in FACTORY_TABLES {
            orders.extend(self.fetch_table(table, factory)?);
        }

        tracing::info!(count = orders.len(), "預估訂單載入完成");
        Ok(orders)
    }

    /// 讀取單一廠別查詢表
    fn fetch_table(&self, table: &str, factory: Factory) -> RepositoryResult<Vec<EstimatedOrder>> {
        let mut stmt = self.conn.prepare(&format!("SELECT * FROM \"{}\"", table))?;

        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|c| c.trim().to_string())
            .collect();
        let find = |name: &str| columns.iter().position(|c| c == name);

        // 必要欄位缺失屬於來源結構問題，直接拒絕
        let date_idx = find("預計出貨日").ok_or_else(|| RepositoryError::MissingColumn {
            table: table.to_string(),
            column: "預計出貨日".to_string(),
        })?;
        let volume_idx = find("預估材數").ok_or_else(|| RepositoryError::MissingColumn {
            table: table.to_string(),
            column: "預估材數".to_string(),
        })?;
        let store_idx = find("門市");
        let store_code_idx = find("門市代號");
        let note_idx = find("備註");

        let column_count = columns.len();
        let raw_rows = stmt.query_map([], move |row| {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(row.get::<_, Value>(i)?);
            }
            Ok(values)
        })?;

        let mut orders = Vec::new();
        let mut skipped = 0usize;

        for raw in raw_rows {
            let values = raw?;

            let date = match value_to_date(&values[date_idx]) {
                Some(d) => d,
                None => {
                    skipped += 1;
                    continue;
                }
            };
            let estimated_volume = match value_to_f64(&values[volume_idx]) {
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
                    .and_then(|i| value_to_string(&values[i]))
                    .unwrap_or_default(),
                store_code: store_code_idx.and_then(|i| value_to_string(&values[i])),
                estimated_volume,
                note: note_idx.and_then(|i| value_to_string(&values[i])),
            });
        }

        if skipped > 0 {
            tracing::warn!(table, count = skipped, "剔除日期/材數不可解析的預估訂單");
        }

        Ok(orders)
    }
}
