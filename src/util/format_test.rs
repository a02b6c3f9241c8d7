use time::macros::datetime;

use super::*;

// =============================================================
// Timestamps
// =============================================================

#[test]
fn parses_local_date_time_with_and_without_fraction() {
    assert_eq!(parse_timestamp("2024-05-01T10:00:00"), Some(datetime!(2024-05-01 10:00:00)));
    assert_eq!(parse_timestamp("2024-05-01T10:00:00.123456"), Some(datetime!(2024-05-01 10:00:00.123456)));
}

#[test]
fn parses_offset_timestamps_by_dropping_offset() {
    assert_eq!(parse_timestamp("2024-05-01T10:00:00Z"), Some(datetime!(2024-05-01 10:00:00)));
}

#[test]
fn rejects_garbage_timestamps() {
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn format_date_uses_korean_layout() {
    assert_eq!(format_date("2024-01-05T09:07:00"), "2024. 01. 05. 오전 09:07");
    assert_eq!(format_date("2024-01-05T14:30:00"), "2024. 01. 05. 오후 02:30");
    assert_eq!(format_date("2024-01-05T00:15:00"), "2024. 01. 05. 오전 12:15");
}

#[test]
fn format_date_passes_through_unparseable() {
    assert_eq!(format_date("n/a"), "n/a");
}

#[test]
fn relative_minutes_under_an_hour() {
    let now = datetime!(2024-05-01 10:45:30);
    assert_eq!(format_relative("2024-05-01T10:00:00", now), "45분 전");
    assert_eq!(format_relative("2024-05-01T10:45:00", now), "0분 전");
}

#[test]
fn relative_hours_under_a_day() {
    let now = datetime!(2024-05-01 22:00:00);
    assert_eq!(format_relative("2024-05-01T10:00:00", now), "12시간 전");
}

#[test]
fn relative_falls_back_to_date_after_a_day() {
    let now = datetime!(2024-05-03 10:00:00);
    assert_eq!(format_relative("2024-05-01T10:00:00", now), "2024. 05. 01. 오전 10:00");
}

#[test]
fn relative_future_timestamp_clamps_to_zero() {
    let now = datetime!(2024-05-01 10:00:00);
    assert_eq!(format_relative("2024-05-01T10:05:00", now), "0분 전");
}

// =============================================================
// Categories / previews
// =============================================================

#[test]
fn category_label_and_color() {
    assert_eq!(category_label("QNA"), "질문");
    assert_eq!(category_label("FREE"), "FREE");
    assert_eq!(category_color("NOTICE"), "#dc3545");
    assert_eq!(category_color("공지"), "#dc3545");
    assert_eq!(category_color(""), DEFAULT_CATEGORY_COLOR);
}

#[test]
fn preview_cuts_long_text() {
    let long = "가".repeat(150);
    let out = preview(Some(&long));
    assert_eq!(out.chars().count(), 103);
    assert!(out.ends_with("..."));
}

#[test]
fn preview_strips_markup_and_handles_empty() {
    assert_eq!(preview(Some("<p>hello</p>")), "hello");
    assert_eq!(preview(None), "내용이 없습니다.");
    assert_eq!(preview(Some("<p></p>")), "내용이 없습니다.");
}
