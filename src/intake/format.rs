//! Currency and date normalization.
//!
//! Both formatters are total: garbage input yields `"$0.00"` or `""`, never an error.

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

pub const ZERO_CURRENCY: &str = "$0.00";

lazy_static! {
    static ref NON_NUMERIC: Regex = Regex::new(r"[^0-9.\-]").expect("valid currency regex");
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)").expect("valid prefix regex");
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%m/%d/%y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse the leading number out of free-form money text.
///
/// Everything except digits, `.` and `-` is dropped first, then the longest
/// numeric prefix is read, so `"$1,250.00 (approx)"` becomes `1250.00`.
/// Numbers beyond the `Decimal` range are discarded.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let stripped = NON_NUMERIC.replace_all(raw, "");
    let prefix = NUMERIC_PREFIX.find(&stripped)?.as_str();

    let mut number = prefix.trim_end_matches('.').to_string();
    if let Some(rest) = number.strip_prefix("-.") {
        number = format!("-0.{}", rest);
    } else if number.starts_with('.') {
        number.insert(0, '0');
    }

    match Decimal::from_str(&number) {
        Ok(amount) => Some(amount),
        Err(e) => {
            log::debug!("discarding amount {:?}: {}", number, e);
            None
        }
    }
}

/// Render an amount as `$1,234.50`, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Format user-entered money. Missing or unparseable input becomes `"$0.00"`.
///
/// Idempotent: formatting an already formatted value returns it unchanged.
pub fn format_currency(value: Option<&str>) -> String {
    value
        .and_then(parse_amount)
        .map(format_amount)
        .unwrap_or_else(|| ZERO_CURRENCY.to_string())
}

/// Parse a calendar date without any timezone conversion.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .find(|date| (1000..=9999).contains(&date.year()))
    {
        return Some(date);
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = DateTime::parse_from_rfc2822(text) {
        return Some(stamp.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|stamp| stamp.date())
}

/// Format a date as zero-padded `MM/DD/YYYY`, or `""` when it cannot be read.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map(|date| date.format("%m/%d/%Y").to_string())
        .unwrap_or_default()
}

/// Date formatting for raw JSON values. Numbers are Unix epoch milliseconds.
pub fn format_date_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => format_date(Some(s)),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|stamp| stamp.date_naive().format("%m/%d/%Y").to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
