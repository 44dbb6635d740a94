//! Safe parsing wrappers and string predicates.
//!
//! `try_parse_*` return `None` instead of an error; `is_*` report whether a
//! parse would succeed and are `false` for blank input. Surrounding
//! whitespace is ignored for numbers, booleans and dates.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Date/time layouts tried after RFC 3339.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse `source` into any `FromStr` type.
pub fn try_parse<T: FromStr>(source: &str) -> Option<T> {
    source.trim().parse().ok()
}

pub fn is_parsable<T: FromStr>(source: &str) -> bool {
    !is_blank(source) && try_parse::<T>(source).is_some()
}

/// `true`/`false`, case-insensitive.
pub fn try_parse_bool(source: &str) -> Option<bool> {
    let s = source.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub fn is_bool(source: &str) -> bool {
    try_parse_bool(source).is_some()
}

pub fn try_parse_i8(source: &str) -> Option<i8> {
    try_parse(source)
}

pub fn try_parse_u8(source: &str) -> Option<u8> {
    try_parse(source)
}

pub fn try_parse_i16(source: &str) -> Option<i16> {
    try_parse(source)
}

pub fn try_parse_i64(source: &str) -> Option<i64> {
    try_parse(source)
}

/// Integer in the given radix (2..=36), e.g. 16 for hex. A `0x`/`0b`/`0o`
/// prefix matching the radix is accepted.
pub fn try_parse_i64_radix(source: &str, radix: u32) -> Option<i64> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    let s = source.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let prefix = match radix {
        16 => Some("0x"),
        8 => Some("0o"),
        2 => Some("0b"),
        _ => None,
    };
    let digits = prefix
        .and_then(|p| digits.strip_prefix(p).or_else(|| digits.strip_prefix(&p.to_uppercase())))
        .unwrap_or(digits);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

pub fn try_parse_f32(source: &str) -> Option<f32> {
    try_parse(source)
}

pub fn try_parse_f64(source: &str) -> Option<f64> {
    try_parse(source)
}

pub fn is_i64(source: &str) -> bool {
    is_parsable::<i64>(source)
}

pub fn is_f64(source: &str) -> bool {
    is_parsable::<f64>(source)
}

/// RFC 3339 date/time, keeping its offset.
pub fn try_parse_datetime_with_offset(source: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(source.trim()).ok()
}

/// Date/time without offset. RFC 3339 input is converted to its local
/// (wall-clock) time; a bare `YYYY-MM-DD` is midnight.
pub fn try_parse_datetime(source: &str) -> Option<NaiveDateTime> {
    let s = source.trim();
    if let Some(dt) = try_parse_datetime_with_offset(s) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

pub fn is_datetime(source: &str) -> bool {
    try_parse_datetime(source).is_some()
}

/// Empty or whitespace only.
pub fn is_blank(source: &str) -> bool {
    source.trim().is_empty()
}

pub fn is_none_or_blank(source: Option<&str>) -> bool {
    source.is_none_or(is_blank)
}

pub fn is_none_or_empty(source: Option<&str>) -> bool {
    source.is_none_or(str::is_empty)
}

/// Reverse by characters.
pub fn reverse(source: &str) -> String {
    source.chars().rev().collect()
}
