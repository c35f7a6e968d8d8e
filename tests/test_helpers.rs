// ==========================================
// 測試輔助模組
// ==========================================
// 職責: 建立 tempfile 支撐的測試資料庫與測試資料
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use factory_comparison::domain::record::{EstimatedOrder, ProductionRecord};
use factory_comparison::domain::types::Factory;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// 便捷日期建構
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 建立測試用生產記錄
pub fn production_record(ship_date: NaiveDate, factory: Factory, volume: f64) -> ProductionRecord {
    ProductionRecord {
        ship_date,
        factory,
        volume,
        production_nature: "生產".to_string(),
        store_name: "測試門市".to_string(),
        store_code: Some("A01".to_string()),
        drawing_no: None,
        color_no: None,
        customer: None,
        splitter: None,
        weight: None,
    }
}

/// 建立測試用預估訂單
pub fn estimated_order(order_date: NaiveDate, factory: Factory, volume: f64) -> EstimatedOrder {
    EstimatedOrder {
        date: order_date,
        factory,
        store_name: "測試門市".to_string(),
        store_code: None,
        estimated_volume: volume,
        note: None,
    }
}

/// 生產資料庫測試列: (出貨日期, 廠別代碼, 材數, 生產性質)
pub type ProductionSeedRow<'a> = (&'a str, &'a str, f64, &'a str);

/// 建立生產測試資料庫（ev1020 表）
pub fn create_production_db(dir: &Path, rows: &[ProductionSeedRow]) -> PathBuf {
    let db_path = dir.join("eiffel_test.db");
    let conn = Connection::open(&db_path).expect("Failed to create test db");

    conn.execute_batch(
        "CREATE TABLE ev1020 (
            ev1020_03 TEXT,  -- 出貨日期
            ev1020_88 TEXT,  -- 廠別
            ev1020_07 REAL,  -- 材數
            ev1020_13 TEXT,  -- 生產性質
            ev1020_20 TEXT,  -- 門市
            ev1020_11 TEXT,  -- 圖號
            ev1020_12 TEXT,  -- 色號
            ev1020_19 TEXT,  -- 客戶
            ev1020_06 TEXT,  -- 拆單人員
            ev1020_09 REAL,  -- 重量
            ev1020_05 TEXT   -- 門市代號
        );",
    )
    .expect("Failed to create ev1020 table");

    for (ship_date, plant_code, volume, nature) in rows {
        conn.execute(
            "INSERT INTO ev1020 (
                ev1020_03, ev1020_88, ev1020_07, ev1020_13,
                ev1020_20, ev1020_11, ev1020_12, ev1020_19,
                ev1020_06, ev1020_09, ev1020_05
            ) VALUES (?1, ?2, ?3, ?4, '測試門市', 'D-01', 'C-01', '客戶', '人員', 1.5, 'A01')",
            params![ship_date, plant_code, volume, nature],
        )
        .expect("Failed to insert production row");
    }

    db_path
}

/// 預估訂單測試列: (預計出貨日, 預估材數)
pub type EstimateSeedRow<'a> = (&'a str, f64);

/// 建立預估訂單測試資料庫（彰化查詢/台南查詢 兩表）
pub fn create_estimate_db(
    dir: &Path,
    changhua: &[EstimateSeedRow],
    tainan: &[EstimateSeedRow],
) -> PathBuf {
    let db_path = dir.join("estimates_test.db");
    let conn = Connection::open(&db_path).expect("Failed to create estimate db");

    for table in ["彰化查詢", "台南查詢"] {
        conn.execute_batch(&format!(
            "CREATE TABLE \"{}\" (
                預計出貨日 TEXT,
                門市 TEXT,
                門市代號 TEXT,
                預估材數 REAL,
                備註 TEXT
            );",
            table
        ))
        .expect("Failed to create estimate table");
    }

    for (table, rows) in [("彰化查詢", changhua), ("台南查詢", tainan)] {
        for (order_date, volume) in rows {
            conn.execute(
                &format!(
                    "INSERT INTO \"{}\" (預計出貨日, 門市, 門市代號, 預估材數, 備註)
                     VALUES (?1, '測試門市', 'A01', ?2, '')",
                    table
                ),
                params![order_date, volume],
            )
            .expect("Failed to insert estimate row");
        }
    }

    db_path
}
