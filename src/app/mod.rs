// ==========================================
// 工廠材數比較系統 - 應用層
// ==========================================
// 職責: 會期狀態與互動選單
// ==========================================

pub mod menu;
pub mod state;

// 重導出
pub use menu::run_menu;
pub use state::AppState;
