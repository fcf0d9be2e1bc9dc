use chrono::NaiveTime;
use rlabourratio::errors::AppError;
use rlabourratio::utils::time::{normalize_clock, parse_break_notes, parse_clock, split_break_notes};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_normalize_clock_forms() {
    assert_eq!(normalize_clock("9"), "9:00");
    assert_eq!(normalize_clock("9.30"), "9:30");
    assert_eq!(normalize_clock(" 21:15 "), "21:15");
}

#[test]
fn test_parse_clock_accepts_loose_formats() {
    assert_eq!(parse_clock("start_time", "9").unwrap(), t(9, 0));
    assert_eq!(parse_clock("start_time", "09").unwrap(), t(9, 0));
    assert_eq!(parse_clock("start_time", "9.30").unwrap(), t(9, 30));
    assert_eq!(parse_clock("start_time", "21:15").unwrap(), t(21, 15));
    assert_eq!(parse_clock("start_time", "0:05").unwrap(), t(0, 5));
}

#[test]
fn test_parse_clock_rejects_out_of_range() {
    for raw in ["25:00", "9:75", "abc", ""] {
        match parse_clock("end_time", raw) {
            Err(AppError::Parse { field, value }) => {
                assert_eq!(field, "end_time");
                assert_eq!(value, raw);
            }
            other => panic!("expected parse error for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_split_break_notes_strips_markers_and_spaces() {
    let (start, end) = split_break_notes("1.30PM - 2PM", "-").unwrap().unwrap();
    assert_eq!(start, "1.30");
    assert_eq!(end, "2");

    let (start, end) = split_break_notes("10am-10.15am", "-").unwrap().unwrap();
    assert_eq!(start, "10");
    assert_eq!(end, "10.15");
}

#[test]
fn test_split_break_notes_empty_means_no_break() {
    assert!(split_break_notes("", "-").unwrap().is_none());
    assert!(split_break_notes("   ", "-").unwrap().is_none());
}

#[test]
fn test_split_break_notes_requires_two_bounds() {
    for raw in ["15", "15-", "-16"] {
        assert!(matches!(
            split_break_notes(raw, "-"),
            Err(AppError::Validation(_))
        ));
    }
}

#[test]
fn test_break_before_shift_start_is_read_as_pm() {
    let b = parse_break_notes("1.30PM-2PM", "-", t(9, 0), t(17, 0))
        .unwrap()
        .unwrap();
    assert_eq!(b.start, t(13, 30));
    assert_eq!(b.end, t(14, 0));
}

#[test]
fn test_break_inside_shift_is_kept() {
    let b = parse_break_notes("15-15.30", "-", t(9, 0), t(17, 0))
        .unwrap()
        .unwrap();
    assert_eq!(b.start, t(15, 0));
    assert_eq!(b.end, t(15, 30));

    let b = parse_break_notes("10-10.15", "-", t(9, 0), t(17, 0))
        .unwrap()
        .unwrap();
    assert_eq!(b.start, t(10, 0));
}

#[test]
fn test_overnight_shift_break_is_not_shifted() {
    let b = parse_break_notes("2-2.30", "-", t(22, 0), t(6, 0))
        .unwrap()
        .unwrap();
    assert_eq!(b.start, t(2, 0));
    assert_eq!(b.end, t(2, 30));
}

#[test]
fn test_break_notes_custom_separator() {
    let b = parse_break_notes("12:00/12:30", "/", t(9, 0), t(17, 0))
        .unwrap()
        .unwrap();
    assert_eq!(b.start, t(12, 0));
    assert_eq!(b.end, t(12, 30));
}

#[test]
fn test_break_notes_bad_time_names_field() {
    match parse_break_notes("13-x", "-", t(9, 0), t(17, 0)) {
        Err(AppError::Parse { field, .. }) => assert_eq!(field, "break_end"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_break_end_past_noon_is_read_as_pm() {
    let b = parse_break_notes("11AM-1PM", "-", t(9, 0), t(17, 0))
        .unwrap()
        .unwrap();
    assert_eq!(b.start, t(11, 0));
    assert_eq!(b.end, t(13, 0));

    let b = parse_break_notes("11.30-1", "-", t(9, 0), t(17, 0))
        .unwrap()
        .unwrap();
    assert_eq!(b.start, t(11, 30));
    assert_eq!(b.end, t(13, 0));
}
