// ==========================================
// 設定持久化 集成測試
// ==========================================
// 測試目標: fail-soft 載入、立即保存、驗證閘門
// ==========================================

use factory_comparison::app::AppState;
use factory_comparison::config::{
    CapacityLimits, RatioThresholds, SettingsError, SettingsStore, SourcePathStore,
    DEFAULT_LOWER_RATIO, DEFAULT_UPPER_RATIO,
};
use std::fs;
use std::path::PathBuf;

// ==========================================
// SettingsStore
// ==========================================

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::in_dir(dir.path());

    let (thresholds, capacities) = store.load();

    assert_eq!(thresholds.upper(), DEFAULT_UPPER_RATIO);
    assert_eq!(thresholds.lower(), DEFAULT_LOWER_RATIO);
    assert_eq!(capacities, CapacityLimits::default());
}

#[test]
fn test_corrupt_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::in_dir(dir.path());
    fs::write(store.path(), "{ 這不是 JSON").unwrap();

    let (thresholds, _) = store.load();

    assert_eq!(thresholds.upper(), DEFAULT_UPPER_RATIO);
    assert_eq!(thresholds.lower(), DEFAULT_LOWER_RATIO);
}

#[test]
fn test_invalid_values_in_file_yield_defaults() {
    // 檔案內容繞過建構子寫入非法值，載入時仍需驗證
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::in_dir(dir.path());
    fs::write(store.path(), r#"{"upper": 1.0, "lower": 2.0}"#).unwrap();

    let (thresholds, _) = store.load();

    assert_eq!(thresholds.upper(), DEFAULT_UPPER_RATIO);
    assert_eq!(thresholds.lower(), DEFAULT_LOWER_RATIO);
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::in_dir(dir.path());

    let thresholds = RatioThresholds::new(2.5, 1.5).unwrap();
    let capacities = CapacityLimits {
        changhua: Some(12000),
        tainan: Some(8000),
    };
    store.save(thresholds, capacities).unwrap();

    let (loaded_thresholds, loaded_capacities) = store.load();
    assert_eq!(loaded_thresholds.upper(), 2.5);
    assert_eq!(loaded_thresholds.lower(), 1.5);
    assert_eq!(loaded_capacities, capacities);
}

#[test]
fn test_legacy_file_without_capacity_fields() {
    // 舊版檔案只有 upper/lower 兩鍵
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::in_dir(dir.path());
    fs::write(store.path(), r#"{"upper": 2.2, "lower": 1.8}"#).unwrap();

    let (thresholds, capacities) = store.load();

    assert_eq!(thresholds.upper(), 2.2);
    assert_eq!(capacities.changhua, None);
    assert_eq!(capacities.tainan, None);
}

// ==========================================
// SourcePathStore
// ==========================================

#[test]
fn test_source_paths_default_into_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = SourcePathStore::new(dir.path());

    assert_eq!(store.load_db_path(), dir.path().join("eiffel.db"));
    assert_eq!(
        store.load_estimate_path(),
        dir.path().join("estimated_orders.db")
    );
}

#[test]
fn test_source_paths_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SourcePathStore::new(dir.path());

    let db = PathBuf::from("/data/eiffel.db");
    let est = PathBuf::from("/data/estimates.xlsx");
    store.save_db_path(&db).unwrap();
    store.save_estimate_path(&est).unwrap();

    assert_eq!(store.load_db_path(), db);
    assert_eq!(store.load_estimate_path(), est);
}

// ==========================================
// AppState 設定變更
// ==========================================

#[test]
fn test_set_thresholds_persists_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::initialize(dir.path());

    state.set_thresholds(3.0, 2.0).unwrap();

    assert_eq!(state.thresholds().upper(), 3.0);
    // 另開 store 驗證已落盤
    let (reloaded, _) = SettingsStore::in_dir(dir.path()).load();
    assert_eq!(reloaded.upper(), 3.0);
    assert_eq!(reloaded.lower(), 2.0);
}

#[test]
fn test_rejected_thresholds_leave_state_and_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::initialize(dir.path());
    state.set_thresholds(2.5, 1.5).unwrap();

    let result = state.set_thresholds(1.0, 2.0); // 下限 >= 上限

    assert!(matches!(
        result,
        Err(SettingsError::InvalidThresholds { .. })
    ));
    assert_eq!(state.thresholds().upper(), 2.5);
    let (reloaded, _) = SettingsStore::in_dir(dir.path()).load();
    assert_eq!(reloaded.upper(), 2.5);
    assert_eq!(reloaded.lower(), 1.5);
}

#[test]
fn test_set_capacities_persists_alongside_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::initialize(dir.path());
    state.set_thresholds(2.5, 1.5).unwrap();

    state
        .set_capacities(CapacityLimits {
            changhua: Some(10000),
            tainan: None,
        })
        .unwrap();

    // 產能保存不得覆蓋既有門檻
    let (thresholds, capacities) = SettingsStore::in_dir(dir.path()).load();
    assert_eq!(thresholds.upper(), 2.5);
    assert_eq!(capacities.changhua, Some(10000));
    assert_eq!(capacities.tainan, None);
}

#[test]
fn test_set_db_path_rejects_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::initialize(dir.path());

    let result = state.set_db_path(PathBuf::new());

    assert!(matches!(result, Err(SettingsError::InvalidPath(_))));
}

#[test]
fn test_set_db_path_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::initialize(dir.path());

    state.set_db_path(PathBuf::from("/srv/eiffel.db")).unwrap();

    assert_eq!(state.db_path(), PathBuf::from("/srv/eiffel.db").as_path());
    let store = SourcePathStore::new(dir.path());
    assert_eq!(store.load_db_path(), PathBuf::from("/srv/eiffel.db"));
}
