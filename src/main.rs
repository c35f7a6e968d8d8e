// ==========================================
// 工廠材數比較系統 - 主入口
// ==========================================
// 技術棧: Rust + SQLite
// 系統定位: 訂單分配決策支持
// ==========================================

use factory_comparison::app::{run_menu, AppState};
use factory_comparison::config::paths::default_config_dir;
use factory_comparison::{i18n, logging};

fn main() -> anyhow::Result<()> {
    // 初始化日誌系統
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 訂單分配決策支持", factory_comparison::APP_NAME);
    tracing::info!("系統版本: {}", factory_comparison::VERSION);
    tracing::info!("==================================================");

    println!("=== {} 啟動 ===", i18n::t("app.title"));

    // 設定目錄（比例門檻/產能/來源路徑）
    let config_dir = default_config_dir();
    tracing::info!("設定目錄: {}", config_dir.display());

    // 建立會期狀態（所有設定 fail-soft 載入）
    let mut state = AppState::initialize(&config_dir);

    // 進入互動選單迴圈
    run_menu(&mut state)?;

    Ok(())
}
