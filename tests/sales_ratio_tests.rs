mod common;
use chrono::NaiveTime;
use common::assert_close;
use rlabourratio::core::calculator::ratio::{compute_ratio, select_best_worst};
use rlabourratio::core::calculator::sales::{aggregate_sales, round_to};
use rlabourratio::errors::AppError;
use rlabourratio::models::{HourSlot, HourTable, TransactionRecord};

fn tx(h: u32, m: u32, amount: f64) -> TransactionRecord {
    TransactionRecord::new(NaiveTime::from_hms_opt(h, m, 0).unwrap(), amount).unwrap()
}

fn slot(h: u32) -> HourSlot {
    HourSlot::new(h).unwrap()
}

fn table(entries: &[(u32, f64)]) -> HourTable {
    let mut values = [0.0; 24];
    for (h, v) in entries {
        values[*h as usize] = *v;
    }
    HourTable::from_values(values)
}

// ---------------------------
// Sales
// ---------------------------

#[test]
fn test_sales_grouped_on_hour_boundaries() {
    let sales = aggregate_sales(
        &[tx(10, 0, 5.0), tx(10, 59, 7.5), tx(11, 0, 3.0), tx(23, 59, 1.0)],
        2,
    );

    assert_close(sales[slot(10)], 12.5);
    assert_close(sales[slot(11)], 3.0);
    assert_close(sales[slot(23)], 1.0);
    assert_close(sales[slot(9)], 0.0);
    assert_eq!(sales.iter().count(), 24);
}

#[test]
fn test_sales_rounded_per_hour() {
    let sales = aggregate_sales(&[tx(10, 5, 0.1), tx(10, 55, 0.2), tx(11, 0, 1.234), tx(11, 1, 1.0)], 2);

    assert_eq!(sales[slot(10)], 0.3);
    assert_eq!(sales[slot(11)], 2.23);
}

#[test]
fn test_sales_empty_is_all_zero() {
    let sales = aggregate_sales(&[], 2);
    assert!(sales.iter().all(|(_, v)| v == 0.0));
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(2.345678, 2), 2.35);
    assert_eq!(round_to(2.345678, 0), 2.0);
}

#[test]
fn test_transaction_rejects_negative_amount() {
    let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    assert!(matches!(
        TransactionRecord::new(t, -0.01),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        TransactionRecord::new(t, f64::INFINITY),
        Err(AppError::Validation(_))
    ));
}

// ---------------------------
// Ratio
// ---------------------------

#[test]
fn test_compute_ratio_branches() {
    let labour = table(&[(9, 5.0), (11, 50.0)]);
    let sales = table(&[(11, 200.0), (12, 80.0)]);
    let ratios = compute_ratio(&labour, &sales);

    // cost without sales: negative sentinel
    assert_close(ratios[slot(9)], -5.0);
    // nothing at all
    assert_close(ratios[slot(10)], 0.0);
    assert_close(ratios[slot(11)], 25.0);
    // sales without cost
    assert_close(ratios[slot(12)], 0.0);
}

#[test]
fn test_select_negative_is_worst() {
    let ratios = table(&[(9, -5.0), (10, 30.0), (11, 10.0)]);
    let (best, worst) = select_best_worst(&ratios).unwrap();

    assert_eq!(worst.key(), "09:00");
    assert_eq!(best.key(), "11:00");
}

#[test]
fn test_select_most_negative_wins() {
    let ratios = table(&[(9, -5.0), (14, -12.0), (15, 40.0)]);
    let (best, worst) = select_best_worst(&ratios).unwrap();

    assert_eq!(worst, slot(14));
    assert_eq!(best, slot(15));
}

#[test]
fn test_select_highest_when_no_negative() {
    let ratios = table(&[(8, 40.0), (9, 20.0), (10, 40.0)]);
    let (best, worst) = select_best_worst(&ratios).unwrap();

    // ties go to the earlier hour
    assert_eq!(worst, slot(8));
    assert_eq!(best, slot(9));
}

#[test]
fn test_select_best_ties_earlier_hour() {
    let ratios = table(&[(12, 10.0), (13, 10.0), (20, 55.0)]);
    let (best, worst) = select_best_worst(&ratios).unwrap();

    assert_eq!(best, slot(12));
    assert_eq!(worst, slot(20));
}

#[test]
fn test_select_without_positive_ratio_fails() {
    let ratios = table(&[(9, -5.0), (10, -1.0)]);
    assert!(matches!(
        select_best_worst(&ratios),
        Err(AppError::NoPositiveRatio)
    ));

    assert!(matches!(
        select_best_worst(&HourTable::new()),
        Err(AppError::NoPositiveRatio)
    ));
}
