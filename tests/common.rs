#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SHIFTS_CSV: &str = "\
break_notes,end_time,pay_rate,start_time
1PM-2PM,17:00,10.0,09:00
,19:15,20.0,16:30
";

pub const TRANSACTIONS_CSV: &str = "\
amount,time
50.00,09:15
50.00,09:40
40.00,10:05
200.00,11:30
20.00,12:00
30.00,13:00
10.00,15:20
40.00,16:10
80.00,17:50
10.00,18:05
";

pub fn rlr() -> Command {
    cargo_bin_cmd!("rlabourratio")
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rlabourratio.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write fixture");
    p
}

/// Shifts and transactions fixtures for a test
pub fn setup_inputs(name: &str) -> (String, String) {
    let shifts = write_fixture(&format!("{name}_shifts"), "csv", SHIFTS_CSV);
    let transactions = write_fixture(&format!("{name}_transactions"), "csv", TRANSACTIONS_CSV);
    (shifts, transactions)
}

/// Config path that does not exist, so defaults are used and the user's file is never read
pub fn isolated_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "conf")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
