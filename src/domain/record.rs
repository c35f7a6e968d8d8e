// ==========================================
// 工廠材數比較系統 - 資料記錄領域模型
// ==========================================
// 職責: 生產記錄與預估訂單的強型別結構
// 紅線: 來源讀入即不可變；選填欄位顯式 Option，
//       不以鍵缺失的靜默回退代替
// ==========================================

use crate::domain::types::Factory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionRecord - 生產記錄
// ==========================================
// 來源: 生產資料庫 ev1020 表（僅「生產」性質列）
// 生命週期: 每次載入整批替換，不做增量合併
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    // ===== 核心欄位 =====
    pub ship_date: NaiveDate, // 出貨日期
    pub factory: Factory,     // 廠別（匯入時已由代碼驗證）
    pub volume: f64,          // 材數

    // ===== 描述欄位 =====
    pub production_nature: String,  // 生產性質
    pub store_name: String,         // 門市
    pub store_code: Option<String>, // 門市代號
    pub drawing_no: Option<String>, // 圖號
    pub color_no: Option<String>,   // 色號
    pub customer: Option<String>,   // 客戶
    pub splitter: Option<String>,   // 拆單人員
    pub weight: Option<f64>,        // 重量
}

// ==========================================
// EstimatedOrder - 預估訂單
// ==========================================
// 來源: 預估訂單資料庫（彰化查詢/台南查詢）或 Excel
// 生命週期: 會期內駐留記憶體，不回寫來源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedOrder {
    pub date: NaiveDate,            // 預計出貨日
    pub factory: Factory,           // 工廠（由表名/工作表名判定）
    pub store_name: String,         // 門市
    pub store_code: Option<String>, // 門市代號
    pub estimated_volume: f64,      // 預估材數
    pub note: Option<String>,       // 備註
}
