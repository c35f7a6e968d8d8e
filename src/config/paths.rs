// ==========================================
// 工廠材數比較系統 - 來源路徑設定
// ==========================================
// 儲存: database_config.json  { "db_path": ... }
//       estimate_config.json  { "estimate_path": ... }
// 比例設定與來源路徑分檔存放，互不影響
// ==========================================

use crate::config::error::SettingsResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 生產資料庫預設檔名
pub const DEFAULT_DB_FILE: &str = "eiffel.db";

/// 預估訂單資料庫預設檔名
pub const DEFAULT_ESTIMATE_FILE: &str = "estimated_orders.db";

#[derive(Debug, Serialize, Deserialize)]
struct DbConfigFile {
    db_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct EstimateConfigFile {
    estimate_path: String,
}

/// 取得預設設定目錄
///
/// 優先使用使用者資料目錄，取不到時退回工作目錄
pub fn default_config_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("factory-comparison"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// ==========================================
// SourcePathStore - 來源路徑持久化
// ==========================================
pub struct SourcePathStore {
    config_dir: PathBuf,
}

impl SourcePathStore {
    pub const DB_CONFIG_FILE: &'static str = "database_config.json";
    pub const ESTIMATE_CONFIG_FILE: &'static str = "estimate_config.json";

    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// 載入生產資料庫路徑（fail-soft，回退預設位置）
    pub fn load_db_path(&self) -> PathBuf {
        self.load_path(Self::DB_CONFIG_FILE, |raw| {
            serde_json::from_str::<DbConfigFile>(raw).map(|f| f.db_path)
        })
        .unwrap_or_else(|| self.config_dir.join(DEFAULT_DB_FILE))
    }

    /// 載入預估訂單來源路徑（fail-soft，回退預設位置）
    pub fn load_estimate_path(&self) -> PathBuf {
        self.load_path(Self::ESTIMATE_CONFIG_FILE, |raw| {
            serde_json::from_str::<EstimateConfigFile>(raw).map(|f| f.estimate_path)
        })
        .unwrap_or_else(|| self.config_dir.join(DEFAULT_ESTIMATE_FILE))
    }

    /// 保存生產資料庫路徑（變更後立即呼叫）
    pub fn save_db_path(&self, path: &Path) -> SettingsResult<()> {
        let file = DbConfigFile {
            db_path: path.display().to_string(),
        };
        self.write_file(Self::DB_CONFIG_FILE, &serde_json::to_string_pretty(&file)?)
    }

    /// 保存預估訂單來源路徑（變更後立即呼叫）
    pub fn save_estimate_path(&self, path: &Path) -> SettingsResult<()> {
        let file = EstimateConfigFile {
            estimate_path: path.display().to_string(),
        };
        self.write_file(
            Self::ESTIMATE_CONFIG_FILE,
            &serde_json::to_string_pretty(&file)?,
        )
    }

    fn load_path(
        &self,
        file_name: &str,
        parse: impl Fn(&str) -> Result<String, serde_json::Error>,
    ) -> Option<PathBuf> {
        let path = self.config_dir.join(file_name);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(raw) => match parse(&raw) {
                Ok(value) => Some(PathBuf::from(value)),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "路徑設定檔格式錯誤，使用預設路徑"
                    );
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "路徑設定檔讀取失敗，使用預設路徑"
                );
                None
            }
        }
    }

    fn write_file(&self, file_name: &str, content: &str) -> SettingsResult<()> {
        fs::create_dir_all(&self.config_dir)?;
        fs::write(self.config_dir.join(file_name), content)?;
        Ok(())
    }
}
