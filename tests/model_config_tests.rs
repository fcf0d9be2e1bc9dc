mod common;
use common::temp_path;
use rlabourratio::config::Config;
use rlabourratio::errors::AppError;
use rlabourratio::models::HourSlot;
use std::fs;
use std::path::Path;

#[test]
fn test_hour_slot_keys() {
    assert_eq!(HourSlot::new(0).unwrap().key(), "00:00");
    assert_eq!(HourSlot::new(9).unwrap().to_string(), "09:00");
    assert_eq!(HourSlot::new(23).unwrap().key(), "23:00");
    assert!(matches!(HourSlot::new(24), Err(AppError::Validation(_))));
}

#[test]
fn test_hour_slot_fold_and_order() {
    assert_eq!(HourSlot::folded(26), HourSlot::new(2).unwrap());
    assert_eq!(HourSlot::folded(23).hour(), 23);

    let keys: Vec<String> = HourSlot::all().map(|s| s.key()).collect();
    assert_eq!(keys.len(), 24);
    assert_eq!(keys.first().map(String::as_str), Some("00:00"));
    assert_eq!(keys.last().map(String::as_str), Some("23:00"));
}

#[test]
fn test_config_missing_file_gives_defaults() {
    let cfg = Config::load(Path::new(&temp_path("cfg_missing", "conf"))).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.shifts_file, "work_shifts.csv");
    assert_eq!(cfg.transactions_file, "transactions.csv");
    assert_eq!(cfg.break_separator, "-");
    assert_eq!(cfg.sales_decimals, 2);
}

#[test]
fn test_config_save_and_load() {
    let path = temp_path("cfg_roundtrip", "conf");
    let cfg = Config {
        shifts_file: "/data/shifts.csv".into(),
        sales_decimals: 3,
        ..Config::default()
    };

    cfg.save(Path::new(&path)).unwrap();
    let loaded = Config::load(Path::new(&path)).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn test_config_partial_file_uses_defaults() {
    let path = temp_path("cfg_partial", "conf");
    fs::write(&path, "transactions_file: tx.csv\n").unwrap();

    let cfg = Config::load(Path::new(&path)).unwrap();
    assert_eq!(cfg.transactions_file, "tx.csv");
    assert_eq!(cfg.shifts_file, "work_shifts.csv");
}

#[test]
fn test_config_rejects_bad_separator() {
    let path = temp_path("cfg_bad_sep", "conf");
    fs::write(&path, "break_separator: \".\"\n").unwrap();

    assert!(matches!(
        Config::load(Path::new(&path)),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_config_rejects_invalid_yaml() {
    let path = temp_path("cfg_bad_yaml", "conf");
    fs::write(&path, "sales_decimals: [not, a, number]\n").unwrap();

    assert!(matches!(
        Config::load(Path::new(&path)),
        Err(AppError::Config(_))
    ));
}
