//! Clock string parsing.
//!
//! Two modes exist. `Strict` accepts only `H:MM`/`HH:MM` within a single day
//! and reports anything else. `Lenient` reproduces the legacy stream-based
//! reader: it pulls an integer, skips one delimiter character, pulls another
//! integer, and treats whatever it cannot read as zero.

use std::sync::OnceLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::model::Minutes;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Reject malformed or out-of-range times
    #[default]
    Strict,
    /// Read times the legacy way, treating unreadable parts as zero
    Lenient,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    #[error("expected HH:MM")]
    Malformed,

    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u32),

    #[error("minute {0} is outside 0-59")]
    MinuteOutOfRange(u32),
}

fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("clock pattern is valid"))
}

pub fn parse_time(value: &str, mode: ParseMode) -> Result<Minutes, TimeFormatError> {
    match mode {
        ParseMode::Strict => parse_strict(value),
        ParseMode::Lenient => Ok(parse_lenient(value)),
    }
}

pub fn parse_strict(value: &str) -> Result<Minutes, TimeFormatError> {
    let caps = clock_pattern()
        .captures(value.trim())
        .ok_or(TimeFormatError::Malformed)?;

    let hours: u32 = caps[1].parse().map_err(|_| TimeFormatError::Malformed)?;
    let minutes: u32 = caps[2].parse().map_err(|_| TimeFormatError::Malformed)?;

    if hours > 23 {
        return Err(TimeFormatError::HourOutOfRange(hours));
    }
    if minutes > 59 {
        return Err(TimeFormatError::MinuteOutOfRange(minutes));
    }

    Ok((hours * 60 + minutes) as Minutes)
}

/// Never fails. Unreadable components count as zero and no range check is
/// applied, so `25:99` yields `1599`.
pub fn parse_lenient(value: &str) -> Minutes {
    let Some((hours, rest)) = leading_int(value) else {
        return 0;
    };

    // one delimiter character of any kind, as long as it is not whitespace
    let rest = rest.trim_start();
    let mut chars = rest.chars();
    let minutes = match chars.next() {
        Some(_) => leading_int(chars.as_str()).map_or(0, |(m, _)| m),
        None => 0,
    };

    hours.saturating_mul(60).saturating_add(minutes)
}

/// Reads an optionally signed decimal integer after leading whitespace.
/// Saturates instead of overflowing.
fn leading_int(input: &str) -> Option<(i32, &str)> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits[..len].bytes().fold(0i32, |acc, b| {
        acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };
    Some((value, &digits[len..]))
}
