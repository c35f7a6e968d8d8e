// ==========================================
// 工廠材數比較系統 - 領域類型定義
// ==========================================
// 紅線: 廠別識別只有這一張映射表，
//       匯入時即驗證，不散落在聚合邏輯中
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 廠別 (Factory)
// ==========================================
// 生產資料庫以廠別代碼 '001'/'002' 標識，
// 預估訂單來源以廠名字串「彰化廠」/「台南廠」標識。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Factory {
    Changhua, // 彰化廠（比例分子）
    Tainan,   // 台南廠（比例分母）
}

impl Factory {
    /// 兩廠固定順序: 彰化、台南
    pub const ALL: [Factory; 2] = [Factory::Changhua, Factory::Tainan];

    /// 從生產資料庫的廠別代碼解析
    ///
    /// 未知代碼回傳 None，由匯入端決定剔除策略
    pub fn from_plant_code(code: &str) -> Option<Factory> {
        match code.trim() {
            "001" => Some(Factory::Changhua),
            "002" => Some(Factory::Tainan),
            _ => None,
        }
    }

    /// 從預估訂單來源的廠名字串解析
    pub fn from_factory_name(name: &str) -> Option<Factory> {
        match name.trim() {
            "彰化廠" | "彰化" => Some(Factory::Changhua),
            "台南廠" | "台南" => Some(Factory::Tainan),
            _ => None,
        }
    }

    /// 完整廠名
    pub fn display_name(&self) -> &'static str {
        match self {
            Factory::Changhua => "彰化廠",
            Factory::Tainan => "台南廠",
        }
    }

}

impl fmt::Display for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ==========================================
// 訂單分配建議 (Recommendation)
// ==========================================
// 比例判定結果; 台南合計為 0 時比例無法計算，
// 以獨立變體表示，不以無窮大或零代替。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    NotComputable,      // 無法計算（分母為 0）
    AllocateToTainan,   // 比例 > 上限
    AllocateToChanghua, // 比例 < 下限
    Balanced,           // 區間內，維持現狀
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::NotComputable => write!(f, "無法計算"),
            Recommendation::AllocateToTainan => write!(f, "建議分配給台南廠"),
            Recommendation::AllocateToChanghua => write!(f, "建議分配給彰化廠"),
            Recommendation::Balanced => write!(f, "訂單分配正常"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_code_mapping() {
        assert_eq!(Factory::from_plant_code("001"), Some(Factory::Changhua));
        assert_eq!(Factory::from_plant_code(" 002 "), Some(Factory::Tainan));
    }

    #[test]
    fn test_unknown_plant_code_rejected() {
        assert_eq!(Factory::from_plant_code("003"), None);
        assert_eq!(Factory::from_plant_code(""), None);
    }

    #[test]
    fn test_factory_name_mapping() {
        assert_eq!(Factory::from_factory_name("彰化廠"), Some(Factory::Changhua));
        assert_eq!(Factory::from_factory_name(" 台南廠 "), Some(Factory::Tainan));
        assert_eq!(Factory::from_factory_name("高雄廠"), None);
    }

    #[test]
    fn test_recommendation_display() {
        assert_eq!(Recommendation::Balanced.to_string(), "訂單分配正常");
        assert_eq!(Recommendation::NotComputable.to_string(), "無法計算");
    }
}
