//! Display formatting for timestamps, categories and post previews.
//!
//! Backend timestamps are Spring `LocalDateTime` strings
//! (`2024-05-01T10:00:00` with optional fraction). They are parsed with
//! `time` and shown in the Korean locale layout `2024. 05. 01. 오전 10:00`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::net::types::Category;
use crate::util::validation::strip_markup;

/// Label of the "all categories" filter.
pub const ALL_CATEGORIES_LABEL: &str = "전체";
/// Badge color for unknown categories.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6c757d";
const PREVIEW_CHARS: usize = 100;

/// Parse a backend timestamp. Offsets, when present, are dropped.
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(dt.date(), dt.time()));
    }
    PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).ok()
}

/// `YYYY. MM. DD. 오전|오후 hh:mm`; unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), format_datetime)
}

pub fn format_datetime(dt: PrimitiveDateTime) -> String {
    let hour = dt.hour();
    let meridiem = if hour < 12 { "오전" } else { "오후" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!(
        "{}. {:02}. {:02}. {meridiem} {hour12:02}:{:02}",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.minute()
    )
}

/// Comment-style relative time: `N분 전` under an hour, `N시간 전` under a day,
/// the absolute date otherwise.
pub fn format_relative(raw: &str, now: PrimitiveDateTime) -> String {
    let Some(created) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let elapsed = now - created;
    if elapsed < time::Duration::HOUR {
        format!("{}분 전", elapsed.whole_minutes().max(0))
    } else if elapsed < time::Duration::DAY {
        format!("{}시간 전", elapsed.whole_hours())
    } else {
        format_datetime(created)
    }
}

/// Current wall-clock time in the browser's local zone.
pub fn local_now() -> PrimitiveDateTime {
    #[cfg(feature = "csr")]
    {
        browser_now().unwrap_or(PrimitiveDateTime::MIN)
    }
    #[cfg(not(feature = "csr"))]
    {
        let now = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(now.date(), now.time())
    }
}

#[cfg(feature = "csr")]
fn browser_now() -> Option<PrimitiveDateTime> {
    let now = js_sys::Date::new_0();
    let month = time::Month::try_from(u8::try_from(now.get_month() + 1).ok()?).ok()?;
    let date = time::Date::from_calendar_date(
        i32::try_from(now.get_full_year()).ok()?,
        month,
        u8::try_from(now.get_date()).ok()?,
    )
    .ok()?;
    let clock = time::Time::from_hms(
        u8::try_from(now.get_hours()).ok()?,
        u8::try_from(now.get_minutes()).ok()?,
        u8::try_from(now.get_seconds()).ok()?,
    )
    .ok()?;
    Some(PrimitiveDateTime::new(date, clock))
}

/// Korean label for a category code; unknown values pass through.
pub fn category_label(raw: &str) -> String {
    Category::parse(raw).map_or_else(|| raw.to_owned(), |c| c.label().to_owned())
}

pub fn category_color(raw: &str) -> &'static str {
    Category::parse(raw).map_or(DEFAULT_CATEGORY_COLOR, Category::color)
}

/// First 100 characters of the text content, with `...` when cut.
pub fn preview(content: Option<&str>) -> String {
    let text = content.map(strip_markup).unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return "내용이 없습니다.".to_owned();
    }
    if text.chars().count() > PREVIEW_CHARS {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_owned()
    }
}
