// ==========================================
// 工廠材數比較系統 - 會期狀態
// ==========================================
// 職責: 行程生命週期內唯一的共享狀態持有者
// ==========================================
// 單執行緒同步模型: 每個使用者動作跑完才接受下一個，
// 無背景刷新、無並行變更，因此不需要鎖。
// 載入動作整批替換記憶體資料；載入失敗時
// 先前狀態保持不變。
// 門檻/產能變更先驗證、後賦值、再立即持久化。
// ==========================================

use crate::config::error::{SettingsError, SettingsResult};
use crate::config::paths::SourcePathStore;
use crate::config::settings::{CapacityLimits, RatioThresholds, SettingsStore};
use crate::domain::period::WeekPeriod;
use crate::domain::record::{EstimatedOrder, ProductionRecord};
use crate::domain::report::ReportRow;
use crate::engine::aggregator::VolumeAggregator;
use crate::engine::allocation::AllocationEngine;
use crate::engine::report::ReportAssembler;
use crate::importer::estimate_excel::EstimateExcelImporter;
use crate::repository::estimate_repo::EstimatedOrderRepository;
use crate::repository::production_repo::ProductionRecordRepository;
use crate::repository::RepositoryResult;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

// ==========================================
// AppState - 會期狀態
// ==========================================
pub struct AppState {
    // ===== 持久化設定 =====
    settings_store: SettingsStore,
    path_store: SourcePathStore,
    thresholds: RatioThresholds,
    capacities: CapacityLimits,
    db_path: PathBuf,
    estimate_path: PathBuf,

    // ===== 會期內資料（整批替換）=====
    production_records: Vec<ProductionRecord>,
    estimated_orders: Vec<EstimatedOrder>,
}

impl AppState {
    /// 從設定目錄初始化會期
    ///
    /// 所有設定讀取 fail-soft: 缺檔/損毀回退預設值
    pub fn initialize(config_dir: &Path) -> Self {
        let settings_store = SettingsStore::in_dir(config_dir);
        let path_store = SourcePathStore::new(config_dir);

        let (thresholds, capacities) = settings_store.load();
        let db_path = path_store.load_db_path();
        let estimate_path = path_store.load_estimate_path();

        tracing::info!(
            upper = thresholds.upper(),
            lower = thresholds.lower(),
            db_path = %db_path.display(),
            estimate_path = %estimate_path.display(),
            "會期初始化完成"
        );

        Self {
            settings_store,
            path_store,
            thresholds,
            capacities,
            db_path,
            estimate_path,
            production_records: Vec::new(),
            estimated_orders: Vec::new(),
        }
    }

    // ==========================================
    // 讀取存取器
    // ==========================================

    pub fn thresholds(&self) -> RatioThresholds {
        self.thresholds
    }

    pub fn capacities(&self) -> CapacityLimits {
        self.capacities
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn estimate_path(&self) -> &Path {
        &self.estimate_path
    }

    pub fn has_production_data(&self) -> bool {
        !self.production_records.is_empty()
    }

    pub fn estimated_orders(&self) -> &[EstimatedOrder] {
        &self.estimated_orders
    }

    /// 預估訂單檢視: 按（工廠, 日期）升冪
    pub fn estimated_orders_sorted(&self) -> Vec<EstimatedOrder> {
        let mut orders = self.estimated_orders.clone();
        orders.sort_by_key(|o| (o.factory, o.date));
        orders
    }

    // ==========================================
    // 載入動作
    // ==========================================

    /// 載入生產記錄（本週週一起）；成功才整批替換
    pub fn load_production_data(&mut self, today: NaiveDate) -> RepositoryResult<usize> {
        let week_start = WeekPeriod::containing(today).start();
        let repo = ProductionRecordRepository::open(&self.db_path)?;
        let records = repo.fetch_in_production(week_start)?;

        let count = records.len();
        self.production_records = records;
        Ok(count)
    }

    /// 載入預估訂單；依副檔名分流 Excel / SQLite
    ///
    /// 來源檔不存在是有效的「零預估」狀態，不是錯誤；
    /// 其餘失敗向上呈報且先前狀態保持不變
    pub fn load_estimated_orders(&mut self) -> anyhow::Result<usize> {
        if !self.estimate_path.exists() {
            tracing::warn!(
                path = %self.estimate_path.display(),
                "預估訂單來源不存在，以零預估繼續"
            );
            self.estimated_orders = Vec::new();
            return Ok(0);
        }

        let orders = if EstimateExcelImporter::is_excel_path(&self.estimate_path) {
            EstimateExcelImporter::new().load(&self.estimate_path)?
        } else {
            EstimatedOrderRepository::open(&self.estimate_path)?.fetch_all()?
        };

        let count = orders.len();
        self.estimated_orders = orders;
        Ok(count)
    }

    // ==========================================
    // 報表生成
    // ==========================================

    /// 以當前載入資料與門檻快照生成比較報表
    pub fn generate_report(&self) -> Vec<ReportRow> {
        let volumes = VolumeAggregator::new().aggregate(&self.production_records);
        let engine = AllocationEngine::new(self.thresholds);
        ReportAssembler::new().assemble(&volumes, &self.estimated_orders, &engine)
    }

    // ==========================================
    // 設定變更（驗證 → 賦值 → 立即持久化）
    // ==========================================

    /// 變更比例門檻；驗證失敗時先前設定保持不變
    pub fn set_thresholds(&mut self, upper: f64, lower: f64) -> SettingsResult<()> {
        let thresholds = RatioThresholds::new(upper, lower)?;
        self.settings_store.save(thresholds, self.capacities)?;
        self.thresholds = thresholds;
        Ok(())
    }

    /// 變更每週最大材數
    pub fn set_capacities(&mut self, capacities: CapacityLimits) -> SettingsResult<()> {
        self.settings_store.save(self.thresholds, capacities)?;
        self.capacities = capacities;
        Ok(())
    }

    /// 變更生產資料庫路徑
    pub fn set_db_path(&mut self, path: PathBuf) -> SettingsResult<()> {
        if path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidPath("路徑不可為空".to_string()));
        }
        self.path_store.save_db_path(&path)?;
        self.db_path = path;
        Ok(())
    }

    /// 變更預估訂單來源路徑
    pub fn set_estimate_path(&mut self, path: PathBuf) -> SettingsResult<()> {
        if path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidPath("路徑不可為空".to_string()));
        }
        self.path_store.save_estimate_path(&path)?;
        self.estimate_path = path;
        Ok(())
    }
}
