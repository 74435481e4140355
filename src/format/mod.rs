use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use maud::{html, Markup};

/// Visible label for generated anchors; the raw URL stays in the href.
const LINK_LABEL: &str = "開啟連結";

/// Localized AM/PM markers in Google Forms timestamps.
const AM_MARKER: &str = "上午";
const PM_MARKER: &str = "下午";

/// Canonical display format for parsed timestamps.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wrap a URL cell as a safe new-tab anchor.
///
/// Empty input renders nothing. Input without an `http://`/`https://`
/// scheme is given `https://`; an existing scheme is left untouched.
pub fn link_markup(value: &str) -> Markup {
    if value.is_empty() {
        return html! {};
    }
    let href = if value.starts_with("http://") || value.starts_with("https://") {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("https://{value}"))
    };
    html! {
        a href=(href) target="_blank" rel="noopener noreferrer" { (LINK_LABEL) }
    }
}

/// Normalize a spreadsheet timestamp cell for display.
///
/// Tries the localized Google Forms format first
/// (`2023/04/30 上午 10:30:45`), then ISO 8601 with a trailing `Z` read as
/// `+00:00`. Anything unparseable passes through unchanged.
pub fn format_timestamp(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    parse_forms_timestamp(value)
        .or_else(|| parse_iso_timestamp(value))
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Parse `"YYYY/MM/DD 上午|下午 HH:MM:SS"` (12-hour clock).
fn parse_forms_timestamp(s: &str) -> Option<NaiveDateTime> {
    let mut parts = s.split_whitespace();
    let (date, marker, time) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let pm = match marker {
        AM_MARKER => false,
        PM_MARKER => true,
        _ => return None,
    };

    let date = NaiveDate::parse_from_str(date, "%Y/%m/%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S").ok()?;
    let clock = time.hour();
    if !(1..=12).contains(&clock) {
        return None;
    }
    let hour = match (pm, clock) {
        (false, 12) => 0,
        (false, h) => h,
        (true, 12) => 12,
        (true, h) => h + 12,
    };
    Some(date.and_time(time.with_hour(hour)?))
}

/// ISO 8601 fallback: offset-bearing form first, then the naive `T` and
/// space-separated forms. An offset is kept as the wall clock it stamps,
/// not converted.
fn parse_iso_timestamp(s: &str) -> Option<NaiveDateTime> {
    let normalized = match s.strip_suffix('Z') {
        Some(stripped) => Cow::Owned(format!("{stripped}+00:00")),
        None => Cow::Borrowed(s),
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(dt);
        }
    }
    None
}
