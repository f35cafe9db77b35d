use super::*;

#[test]
fn format_time_label_pads_morning_hours() {
    assert_eq!(format_time_label(9, 5), "09:05 AM");
}

#[test]
fn format_time_label_midnight_is_twelve_am() {
    assert_eq!(format_time_label(0, 0), "12:00 AM");
}

#[test]
fn format_time_label_noon_is_twelve_pm() {
    assert_eq!(format_time_label(12, 30), "12:30 PM");
}

#[test]
fn format_time_label_converts_afternoon() {
    assert_eq!(format_time_label(15, 45), "03:45 PM");
    assert_eq!(format_time_label(23, 59), "11:59 PM");
}

#[cfg(not(feature = "csr"))]
#[test]
fn time_label_is_empty_outside_browser() {
    assert!(time_label().is_empty());
}
