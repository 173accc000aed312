//! Scalar typing: the text of a single value to a [`Value`] and back.
//!
//! [`parse_value`] infers the type of a value text in a fixed priority order.
//! [`format_value`] writes a scalar so that `parse_value` reads back the same
//! value.
//!
//! ```rust
//! use nan0::{format_value, parse_value, Value};
//!
//! assert_eq!(parse_value("160_000_500.345"), Value::Number(160000500.345));
//! assert_eq!(parse_value("true"), Value::Bool(true));
//! assert_eq!(parse_value("\"true\""), Value::from("true"));
//! assert_eq!(format_value(&Value::from("true")), "\"true\"");
//! ```

use crate::format::{
    EMPTY_ARRAY, EMPTY_OBJECT, GROUP_SEPARATOR, INVALID_DATE, ITEM, KEY_SEPARATOR, MULTILINE,
};
use crate::Value;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

// Infallible: both patterns are fixed literals.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(?:_\d+)*(?:\.\d+)?$").unwrap());

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})(?:T(\d{2}):(\d{2})(?::(\d{2}))?(?:(Z)|([+-])(\d{1,2})(?::?(\d{2}))?)?)?$",
    )
    .unwrap()
});

/// Infers the type of a value text.
///
/// The text is trimmed, then tried in this order:
///
/// 1. empty text is the empty string
/// 2. a decimal number, optionally grouped with `_`
/// 3. a date or date-time (a matching but impossible date falls through)
/// 4. `true`, `false` and `null`
/// 5. a double-quoted string, unescaped
/// 6. anything else is the text itself
///
/// ```rust
/// use nan0::{parse_value, Value};
///
/// assert_eq!(parse_value("2024"), Value::Number(2024.0));
/// assert!(parse_value("2024-11-13").is_date());
/// assert_eq!(parse_value("2024-02-30"), Value::from("2024-02-30"));
/// assert_eq!(parse_value("  hello  "), Value::from("hello"));
/// ```
#[must_use]
pub fn parse_value(text: &str) -> Value {
    let text = text.trim();
    if text.is_empty() {
        return Value::String(String::new());
    }
    if let Some(n) = parse_number(text) {
        return Value::Number(n);
    }
    if let Some(date) = parse_date(text) {
        return Value::Date(date);
    }
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }
    if let Some(inner) = quoted(text) {
        let s = unescape(inner).unwrap_or_else(|| inner.replace("\\\"", "\""));
        return Value::String(s);
    }
    Value::String(text.to_string())
}

/// Writes a value in its single-line literal form.
///
/// Containers write as their empty marker (`[]` or `{}`). Their contents are
/// the codec's business. Strings with line breaks are quoted with `\n`
/// escapes here; the codec writes them as `|` blocks instead.
///
/// ```rust
/// use nan0::{format_value, Value};
///
/// assert_eq!(format_value(&Value::Number(-0.0)), "0");
/// assert_eq!(format_value(&Value::Number(1234567.0)), "1_234_567");
/// assert_eq!(format_value(&Value::from("say \"hi\"")), r#""say \"hi\"""#);
/// ```
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::Date(dt) => format_date(dt),
        Value::String(s) => {
            if needs_quotes(s) {
                format!("\"{}\"", escape(s))
            } else {
                s.clone()
            }
        }
        Value::Array(_) => EMPTY_ARRAY.to_string(),
        Value::Object(_) => EMPTY_OBJECT.to_string(),
    }
}

/// Returns `true` if `s` must be quoted to read back as the same string.
#[must_use]
pub fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.trim() != s
        || s.starts_with('"')
        || s.starts_with('#')
        || s.starts_with(ITEM)
        || s == ITEM.trim_end()
        || s == MULTILINE
        || s == EMPTY_ARRAY
        || s == EMPTY_OBJECT
        || matches!(s, "true" | "false" | "null")
        || s.contains(&['"', KEY_SEPARATOR, '#'][..])
        || s.chars().any(char::is_control)
        || NUMBER.is_match(s)
        || DATE.is_match(s)
}

/// Formats a number with `_` grouping in the integer part.
///
/// Non-finite numbers have no NaN0 literal and write as `null`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    // Display for f64 is the shortest round-trip form and never uses exponents.
    let plain = n.to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Formats a date as `YYYY-MM-DD`, adding `THH:MM:SS` when the UTC time of
/// day is not midnight.
#[must_use]
pub fn format_date(dt: &DateTime<Utc>) -> String {
    let year = dt.year();
    if !(0..=9999).contains(&year) {
        return INVALID_DATE.to_string();
    }
    let date = format!("{:04}-{:02}-{:02}", year, dt.month(), dt.day());
    let (h, m, s) = (dt.hour(), dt.minute(), dt.second());
    if h == 0 && m == 0 && s == 0 {
        date
    } else {
        format!("{}T{:02}:{:02}:{:02}", date, h, m, s)
    }
}

pub(crate) fn parse_number(text: &str) -> Option<f64> {
    if !NUMBER.is_match(text) {
        return None;
    }
    text.replace(GROUP_SEPARATOR, "").parse::<f64>().ok()
}

/// Reads a date or date-time. Without an offset the time is taken as UTC.
///
/// An offset may omit its colon or its minutes: `+2`, `+0200` and `+02:00`
/// all mean two hours east.
pub(crate) fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let caps = DATE.captures(text)?;
    let num = |i: usize| -> Option<u32> { caps.get(i).and_then(|m| m.as_str().parse().ok()) };

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, num(2)?, num(3)?)?;
    let naive = date.and_hms_opt(num(4).unwrap_or(0), num(5).unwrap_or(0), num(6).unwrap_or(0))?;

    let offset_seconds = match caps.get(8) {
        Some(sign) => {
            let (hours, minutes) = split_offset(caps.get(9)?.as_str(), caps.get(10).map(|m| m.as_str()))?;
            let seconds = (hours * 3600 + minutes * 60) as i32;
            if sign.as_str() == "-" {
                -seconds
            } else {
                seconds
            }
        }
        None => 0,
    };
    let offset = FixedOffset::east_opt(offset_seconds)?;
    let local = offset.from_local_datetime(&naive).single()?;
    Some(local.with_timezone(&Utc))
}

// "+0200" arrives as hours "02" plus minutes "00"; "+2" as hours "2" alone.
fn split_offset(hours: &str, minutes: Option<&str>) -> Option<(u32, u32)> {
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.map_or(Some(0), |m| m.parse().ok())?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some((hours, minutes))
}

fn quoted(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// Escapes a string for use between double quotes.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`]. Returns `None` on a dangling backslash or a broken
/// `\u` escape. Unknown escapes are kept literally.
#[must_use]
pub fn unescape(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            '0' => out.push('\0'),
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                    return None;
                }
                let code_point = u32::from_str_radix(&hex, 16).ok()?;
                out.push(char::from_u32(code_point)?);
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    Some(out)
}
