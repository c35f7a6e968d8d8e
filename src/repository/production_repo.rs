// ==========================================
// 工廠材數比較系統 - 生產記錄倉儲
// ==========================================
// 來源: 生產資料庫 ev1020 表
// 範圍: 生產性質含「生產」且出貨日 >= 本週週一的記錄
// ==========================================
// 廠別代碼在此驗證（'001' 彰化 / '002' 台南），
// 未知代碼記錄記 warn 後剔除，不進入聚合。
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::record::ProductionRecord;
use crate::domain::types::Factory;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{value_to_date, value_to_f64, value_to_string};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::Connection;
use std::path::Path;
use tracing::instrument;

/// 生產記錄查詢（欄位別名對齊來源資料字典）
const PRODUCTION_QUERY: &str = "\
    SELECT \
        ev1020_03 AS ship_date, \
        ev1020_88 AS plant_code, \
        ev1020_07 AS volume, \
        ev1020_13 AS production_nature, \
        ev1020_20 AS store_name, \
        ev1020_11 AS drawing_no, \
        ev1020_12 AS color_no, \
        ev1020_19 AS customer, \
        ev1020_06 AS splitter, \
        ev1020_09 AS weight, \
        ev1020_05 AS store_code \
    FROM ev1020 \
    WHERE ev1020_13 LIKE '%生產%'";

// ==========================================
// ProductionRecordRepository - 生產記錄倉儲
// ==========================================
pub struct ProductionRecordRepository {
    conn: Connection,
}

impl ProductionRecordRepository {
    /// 開啟生產資料庫
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

    /// 讀取「生產中」且出貨日 >= week_start 的記錄
    ///
    /// - 日期/材數不可解析的列視為資料品質問題，記 warn 後剔除
    /// - 空結果是有效狀態，不是錯誤
    #[instrument(skip(self))]
    pub fn fetch_in_production(
        &self,
        week_start: NaiveDate,
    ) -> RepositoryResult<Vec<ProductionRecord>> {
        let mut stmt = self.conn.prepare(PRODUCTION_QUERY)?;

        let raw_rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, Value>(0)?,  // ship_date
                row.get::<_, Value>(1)?,  // plant_code
                row.get::<_, Value>(2)?,  // volume
                row.get::<_, Value>(3)?,  // production_nature
                row.get::<_, Value>(4)?,  // store_name
                row.get::<_, Value>(5)?,  // drawing_no
                row.get::<_, Value>(6)?,  // color_no
                row.get::<_, Value>(7)?,  // customer
                row.get::<_, Value>(8)?,  // splitter
                row.get::<_, Value>(9)?,  // weight
                row.get::<_, Value>(10)?, // store_code
            ))
        })?;

        let mut records = Vec::new();
        let mut skipped_factory = 0usize;
        let mut skipped_invalid = 0usize;

        for raw in raw_rows {
            let (
                ship_date,
                plant_code,
                volume,
                production_nature,
                store_name,
                drawing_no,
                color_no,
                customer,
                splitter,
                weight,
                store_code,
            ) = raw?;

            let ship_date = match value_to_date(&ship_date) {
                Some(d) => d,
                None => {
                    skipped_invalid += 1;
                    continue;
                }
            };

            // 只保留本週（含）以後的資料
            if ship_date < week_start {
                continue;
            }

            let factory = match value_to_string(&plant_code)
                .as_deref()
                .and_then(Factory::from_plant_code)
            {
                Some(f) => f,
                None => {
                    skipped_factory += 1;
                    continue;
                }
            };

            let volume = match value_to_f64(&volume) {
                Some(v) => v,
                None => {
                    skipped_invalid += 1;
                    continue;
                }
            };

            records.push(ProductionRecord {
                ship_date,
                factory,
                volume,
                production_nature: value_to_string(&production_nature).unwrap_or_default(),
                store_name: value_to_string(&store_name).unwrap_or_default(),
                store_code: value_to_string(&store_code),
                drawing_no: value_to_string(&drawing_no),
                color_no: value_to_string(&color_no),
                customer: value_to_string(&customer),
                splitter: value_to_string(&splitter),
                weight: value_to_f64(&weight),
            });
        }

        if skipped_factory > 0 {
            tracing::warn!(count = skipped_factory, "剔除未知廠別代碼的生產記錄");
        }
        if skipped_invalid > 0 {
            tracing::warn!(count = skipped_invalid, "剔除日期/材數不可解析的生產記錄");
        }

        tracing::info!(count = records.len(), %week_start, "生產記錄載入完成");
        Ok(records)
    }
}
