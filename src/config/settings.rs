// ==========================================
// 工廠材數比較系統 - 比例與產能設定
// ==========================================
// 儲存: ratio_settings.json（平面 key-value）
// 欄位: upper / lower / factory1_max_capacity / factory2_max_capacity
// ==========================================
// 不變式: upper > lower > 0（建構子是唯一驗證閘門）
// 變更門檻不回溯影響已生成的報表，
// 只影響之後的計算（引擎以快照建構）。
// ==========================================

use crate::config::error::{SettingsError, SettingsResult};
use crate::domain::types::Factory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 預設比例上限（比例 > 上限 → 建議分配給台南廠）
pub const DEFAULT_UPPER_RATIO: f64 = 2.2;

/// 預設比例下限（比例 < 下限 → 建議分配給彰化廠）
pub const DEFAULT_LOWER_RATIO: f64 = 1.8;

// ==========================================
// RatioThresholds - 比例門檻
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioThresholds {
    upper: f64,
    lower: f64,
}

impl RatioThresholds {
    /// 建立比例門檻
    ///
    /// 驗證規則（任一不符即拒絕，不產生部分變更）:
    /// - upper/lower 必須為有限正數
    /// - lower 必須嚴格小於 upper
    pub fn new(upper: f64, lower: f64) -> SettingsResult<Self> {
        let valid = upper.is_finite() && lower.is_finite() && lower > 0.0 && upper > lower;
        if !valid {
            return Err(SettingsError::InvalidThresholds { upper, lower });
        }
        Ok(Self { upper, lower })
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }
}

impl Default for RatioThresholds {
    fn default() -> Self {
        Self {
            upper: DEFAULT_UPPER_RATIO,
            lower: DEFAULT_LOWER_RATIO,
        }
    }
}

// ==========================================
// CapacityLimits - 每週最大材數（僅供顯示標註）
// ==========================================
// 型別上排除負值；0 視為有效設定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityLimits {
    pub changhua: Option<u32>, // 彰化廠每週最大材數
    pub tainan: Option<u32>,   // 台南廠每週最大材數
}

impl CapacityLimits {
    /// 依廠別取產能上限
    pub fn of(&self, factory: Factory) -> Option<u32> {
        match factory {
            Factory::Changhua => self.changhua,
            Factory::Tainan => self.tainan,
        }
    }
}

// ==========================================
// 持久化檔案結構
// ==========================================
// 鍵名沿用既有 ratio_settings.json 佈局，
// 舊檔可直接讀入（產能欄位缺省為 null）
#[derive(Debug, Serialize, Deserialize)]
struct RatioSettingsFile {
    upper: f64,
    lower: f64,
    #[serde(default)]
    factory1_max_capacity: Option<u32>,
    #[serde(default)]
    factory2_max_capacity: Option<u32>,
}

// ==========================================
// SettingsStore - 設定持久化
// ==========================================
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// 設定檔名
    pub const FILE_NAME: &'static str = "ratio_settings.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 在指定目錄下使用預設檔名
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 載入比例門檻與產能上限
    ///
    /// fail-soft: 檔案不存在、格式損毀或數值非法時
    /// 回退硬編碼預設值（warn 記錄），永不失敗
    pub fn load(&self) -> (RatioThresholds, CapacityLimits) {
        let file = match self.read_file() {
            Ok(Some(file)) => file,
            Ok(None) => return (RatioThresholds::default(), CapacityLimits::default()),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "比例設定檔讀取失敗，使用預設值"
                );
                return (RatioThresholds::default(), CapacityLimits::default());
            }
        };

        // 檔案內容繞過了建構子，讀入後仍需驗證
        let thresholds = match RatioThresholds::new(file.upper, file.lower) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "比例設定值非法，使用預設值"
                );
                RatioThresholds::default()
            }
        };

        let capacities = CapacityLimits {
            changhua: file.factory1_max_capacity,
            tainan: file.factory2_max_capacity,
        };

        (thresholds, capacities)
    }

    /// 保存比例門檻與產能上限（變更後立即呼叫）
    pub fn save(
        &self,
        thresholds: RatioThresholds,
        capacities: CapacityLimits,
    ) -> SettingsResult<()> {
        let file = RatioSettingsFile {
            upper: thresholds.upper(),
            lower: thresholds.lower(),
            factory1_max_capacity: capacities.changhua,
            factory2_max_capacity: capacities.tainan,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;

        tracing::info!(path = %self.path.display(), "比例設定已保存");
        Ok(())
    }

    fn read_file(&self) -> SettingsResult<Option<RatioSettingsFile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let file: RatioSettingsFile = serde_json::from_str(&raw)?;
        Ok(Some(file))
    }
}
