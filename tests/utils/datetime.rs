use chrono::{Local, TimeZone, Utc};
use todoterm::utils::datetime::*;

#[test]
fn test_display_format_is_valid() {
    assert!(is_valid_format(DISPLAY_DATE_FORMAT));
    assert!(is_valid_format("%b %e, %Y"));
    assert!(!is_valid_format("%Y-%"));
}

#[test]
fn test_format_local_date_uses_pattern() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let local = ts.with_timezone(&Local);

    assert_eq!(format_local_date(&ts, "%Y/%m/%d"), local.format("%Y/%m/%d").to_string());
    assert_eq!(format_local_date(&ts, DISPLAY_DATE_FORMAT).len(), 10);
}

#[test]
fn test_today_is_a_utc_date() {
    let before = Utc::now().date_naive();
    let today = today_utc();
    let after = Utc::now().date_naive();
    assert!(today == before || today == after);
}
