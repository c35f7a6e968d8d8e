// ==========================================
// 工廠材數比較系統 - 互動選單
// ==========================================
// 職責: 主控台選單迴圈，逐項執行使用者動作
// ==========================================
// 每個動作跑完才接受下一個（單執行緒同步模型）。
// 載入/設定失敗只提示訊息，會期繼續；
// 先前有效狀態一律保留。
// ==========================================

use crate::app::state::AppState;
use crate::config::settings::CapacityLimits;
use crate::export::csv_exporter::CsvReportExporter;
use crate::export::table::ReportTablePrinter;
use crate::i18n::{t, t_with_args};
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// 執行互動選單迴圈
pub fn run_menu(state: &mut AppState) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();

        let choice = match read_line(&mut input, &t("menu.prompt"))? {
            Some(line) => line,
            None => break, // EOF 視同退出
        };

        match choice.as_str() {
            "1" => action_load(state),
            "2" => action_report(state),
            "3" => action_export(state),
            "4" => action_view_estimates(state),
            "5" => action_set_thresholds(state, &mut input)?,
            "6" => action_set_capacities(state, &mut input)?,
            "7" => action_set_estimate_path(state, &mut input)?,
            "8" => action_set_db_path(state, &mut input)?,
            "9" => {
                println!("{}", t("menu.goodbye"));
                break;
            }
            _ => println!("{}", t("menu.invalid")),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("=== {} ===", t("app.title"));
    println!("{}", t("menu.load"));
    println!("{}", t("menu.report"));
    println!("{}", t("menu.export"));
    println!("{}", t("menu.estimates"));
    println!("{}", t("menu.set_ratio"));
    println!("{}", t("menu.set_capacity"));
    println!("{}", t("menu.set_estimate_path"));
    println!("{}", t("menu.set_db_path"));
    println!("{}", t("menu.exit"));
}

// ==========================================
// 選單動作
// ==========================================

/// 選項1: 載入生產記錄與預估訂單
fn action_load(state: &mut AppState) {
    let today = Local::now().date_naive();

    // 兩項載入各自獨立: 生產資料庫故障不阻擋預估訂單刷新
    match state.load_production_data(today) {
        Ok(0) => println!("警告：沒有找到當週以後的數據"),
        Ok(count) => println!("成功載入 {} 筆生產記錄", count),
        Err(e) => println!("載入生產記錄失敗（保留先前資料）：{}", e),
    }

    match state.load_estimated_orders() {
        Ok(count) => println!("成功載入 {} 筆預估訂單數據", count),
        Err(e) => println!("載入預估訂單失敗（保留先前資料）：{}", e),
    }
}

/// 選項2: 查看比較報告
fn action_report(state: &AppState) {
    if !state.has_production_data() {
        println!("{}", t("menu.load_first"));
        return;
    }

    let rows = state.generate_report();
    println!("\n=== 比較報告 ===");
    let table = ReportTablePrinter::new().render(&rows, &state.capacities());
    print!("{}", table);
}

/// 選項3: 匯出報表至 CSV
fn action_export(state: &AppState) {
    if !state.has_production_data() {
        println!("{}", t("menu.load_first"));
        return;
    }

    let rows = state.generate_report();
    let filename = CsvReportExporter::default_filename(Local::now().date_naive());

    match CsvReportExporter::new().export(&rows, Path::new(&filename)) {
        Ok(()) => println!("{}", t_with_args("report.exported", &[("path", &filename)])),
        Err(e) => println!("匯出報表失敗：{}", e),
    }
}

/// 選項4: 查看預估訂單數據
fn action_view_estimates(state: &AppState) {
    if state.estimated_orders().is_empty() {
        println!("尚未載入預估訂單數據，請先執行選項1");
        return;
    }

    println!("\n=== 預估訂單數據 ===");
    for order in state.estimated_orders_sorted() {
        println!(
            "日期: {}, 工廠: {}, 門市代號: {}, 門市: {}, 預估材數: {}, 備註: {}",
            order.date.format("%Y-%m-%d"),
            order.factory,
            order.store_code.as_deref().unwrap_or(""),
            order.store_name,
            order.estimated_volume,
            order.note.as_deref().unwrap_or("")
        );
    }
}

/// 選項5: 設定比例範圍
fn action_set_thresholds(state: &mut AppState, input: &mut impl BufRead) -> io::Result<()> {
    let current = state.thresholds();
    println!("\n=== 目前的比例設定 ===");
    println!("材數比例 > {} 時，建議分配給台南廠", current.upper());
    println!("材數比例 < {} 時，建議分配給彰化廠", current.lower());

    let upper = match prompt_positive_number(input, "\n請輸入新的上限值（建議分配給台南廠的比例）：")? {
        Some(v) => v,
        None => return Ok(()), // 空白輸入取消
    };

    let lower = loop {
        match prompt_positive_number(input, "請輸入新的下限值（建議分配給彰化廠的比例）：")? {
            Some(v) if v >= upper => println!("下限值必須小於上限值"),
            Some(v) => break v,
            None => return Ok(()),
        }
    };

    match state.set_thresholds(upper, lower) {
        Ok(()) => {
            println!("\n=== 新的比例設定 ===");
            println!("材數比例 > {} 時，建議分配給台南廠", upper);
            println!("材數比例 < {} 時，建議分配給彰化廠", lower);
        }
        Err(e) => println!("設定比例失敗（保留先前設定）：{}", e),
    }
    Ok(())
}

/// 選項6: 設定每週最大材數（空白保留現值）
fn action_set_capacities(state: &mut AppState, input: &mut impl BufRead) -> io::Result<()> {
    println!("\n=== 設定每週最大材數 ===");
    let current = state.capacities();

    let changhua = prompt_capacity(input, "彰化廠", current.changhua)?;
    let tainan = prompt_capacity(input, "台南廠", current.tainan)?;

    let capacities = CapacityLimits { changhua, tainan };
    match state.set_capacities(capacities) {
        Ok(()) => println!(
            "彰化廠最大產能: {}, 台南廠最大產能: {}",
            display_capacity(capacities.changhua),
            display_capacity(capacities.tainan)
        ),
        Err(e) => println!("設定產能失敗（保留先前設定）：{}", e),
    }
    Ok(())
}

/// 選項7: 更改預估訂單來源路徑
fn action_set_estimate_path(state: &mut AppState, input: &mut impl BufRead) -> io::Result<()> {
    println!("目前預估訂單來源: {}", state.estimate_path().display());
    if let Some(line) = read_line(input, "請輸入新的路徑（空白取消）：")? {
        if line.is_empty() {
            println!("取消更改預估訂單數據路徑。");
            return Ok(());
        }
        match state.set_estimate_path(PathBuf::from(line)) {
            Ok(()) => println!("成功更改預估訂單數據路徑！"),
            Err(e) => println!("更改路徑失敗：{}", e),
        }
    }
    Ok(())
}

/// 選項8: 更改生產資料庫路徑
fn action_set_db_path(state: &mut AppState, input: &mut impl BufRead) -> io::Result<()> {
    println!("目前生產資料庫: {}", state.db_path().display());
    if let Some(line) = read_line(input, "請輸入新的路徑（空白取消）：")? {
        if line.is_empty() {
            println!("取消更改資料庫位置。");
            return Ok(());
        }
        match state.set_db_path(PathBuf::from(line)) {
            Ok(()) => println!("成功更改資料庫位置！"),
            Err(e) => println!("更改路徑失敗：{}", e),
        }
    }
    Ok(())
}

// ==========================================
// 輸入輔助
// ==========================================

/// 讀取一行（去除首尾空白）；EOF 回傳 None
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// 重複提示直到讀到正數；空白輸入回傳 None
fn prompt_positive_number(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<f64>> {
    loop {
        let line = match read_line(input, prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        if line.is_empty() {
            return Ok(None);
        }
        match line.parse::<f64>() {
            Ok(v) if v > 0.0 => return Ok(Some(v)),
            Ok(_) => println!("比例必須大於0"),
            Err(_) => println!("請輸入有效的數字"),
        }
    }
}

/// 提示輸入產能；空白保留現值，無法解析時重試
fn prompt_capacity(
    input: &mut impl BufRead,
    factory_name: &str,
    current: Option<u32>,
) -> io::Result<Option<u32>> {
    loop {
        let prompt = format!(
            "請輸入{}每週最大材數 (目前: {}): ",
            factory_name,
            display_capacity(current)
        );
        let line = match read_line(input, &prompt)? {
            Some(line) => line,
            None => return Ok(current),
        };
        if line.is_empty() {
            return Ok(current);
        }
        match line.parse::<u32>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("請輸入有效的數字"),
        }
    }
}

fn display_capacity(capacity: Option<u32>) -> String {
    match capacity {
        Some(v) => v.to_string(),
        None => "未設定".to_string(),
    }
}
