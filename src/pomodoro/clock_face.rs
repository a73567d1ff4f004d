//! Presentation of a remaining-seconds value as a zero-padded `MM:SS` face.

use crate::error::ClockParseError;

/// Splits remaining seconds into whole minutes and leftover seconds.
pub fn split(remaining: u64) -> (u64, u64) {
    (remaining / 60, remaining % 60)
}

/// Minutes are padded to two digits but never truncated, so phases longer
/// than 99 minutes still render (and parse back) exactly.
pub fn format_remaining(remaining: u64) -> String {
    let (minutes, seconds) = split(remaining);
    format!("{:02}:{:02}", minutes, seconds)
}

pub fn parse_remaining(face: &str) -> Result<u64, ClockParseError> {
    let (minutes, seconds) = face
        .trim()
        .split_once(':')
        .ok_or_else(|| ClockParseError::MissingSeparator(face.to_string()))?;
    let minutes = parse_component(minutes)?;
    let seconds = parse_component(seconds)?;
    if seconds >= 60 {
        return Err(ClockParseError::SecondsOutOfRange(seconds));
    }
    minutes
        .checked_mul(60)
        .and_then(|secs| secs.checked_add(seconds))
        .ok_or_else(|| ClockParseError::InvalidNumber(face.to_string()))
}

fn parse_component(raw: &str) -> Result<u64, ClockParseError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClockParseError::InvalidNumber(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| ClockParseError::InvalidNumber(raw.to_string()))
}
