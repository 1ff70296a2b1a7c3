use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::BookingError;

/// An ISO-8601 date-time as the client sent it, plus the instant it denotes.
///
/// Accepted forms are `YYYY-MM-DD`, optionally followed by `T` (or a space)
/// and `HH`, `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`, optionally followed by an
/// offset `Z`, `±HH`, `±HHMM` or `±HH:MM`. Every field is fixed-width.
///
/// The raw string is what gets stored and echoed back; the instant is only
/// used for ordering. Offset-bearing values are normalized to UTC, values
/// without an offset are taken as UTC wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    instant: NaiveDateTime,
}

impl Timestamp {
    pub fn parse(raw: &str) -> Result<Self, BookingError> {
        let instant = parse_instant(raw).ok_or_else(|| {
            BookingError::invalid_input(format!(
                "invalid date-time {raw:?}, use ISO-8601 such as 2026-01-20T10:00:00"
            ))
        })?;

        Ok(Self {
            raw: raw.to_owned(),
            instant,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// Returns true if `self` is strictly later than `other`
    pub fn is_after(&self, other: &Self) -> bool {
        self.instant > other.instant
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.raw)
    }
}

fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    // Everything below slices by byte offset
    if !raw.is_ascii() {
        return None;
    }

    let date = parse_date(raw.get(..10)?)?;
    let rest = &raw[10..];
    if rest.is_empty() {
        return date.and_hms_opt(0, 0, 0);
    }

    let rest = rest.strip_prefix(|c: char| matches!(c, 'T' | 't' | ' '))?;
    let (time, offset) = match rest.find(|c: char| matches!(c, 'Z' | 'z' | '+' | '-')) {
        Some(at) => (&rest[..at], Some(&rest[at..])),
        None => (rest, None),
    };

    let local = date.and_time(parse_time(time)?);
    match offset {
        Some(offset) => Some(
            parse_offset(offset)?
                .from_local_datetime(&local)
                .single()?
                .naive_utc(),
        ),
        None => Some(local),
    }
}

/// `YYYY-MM-DD`
fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 || &s[4..5] != "-" || &s[7..8] != "-" {
        return None;
    }
    let year = digits(&s[..4])?;
    let month = digits(&s[5..7])?;
    let day = digits(&s[8..])?;
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// `HH`, `HH:MM`, `HH:MM:SS` or `HH:MM:SS.f` with 1 to 9 fraction digits
fn parse_time(s: &str) -> Option<NaiveTime> {
    let (clock, fraction) = match s.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (s, None),
    };

    let (hour, minute, second) = match clock.len() {
        2 => (digits(clock)?, 0, 0),
        5 if &clock[2..3] == ":" => (digits(&clock[..2])?, digits(&clock[3..])?, 0),
        8 if &clock[2..3] == ":" && &clock[5..6] == ":" => (
            digits(&clock[..2])?,
            digits(&clock[3..5])?,
            digits(&clock[6..])?,
        ),
        _ => return None,
    };

    let nanos = match fraction {
        // Fractions only follow whole seconds
        Some(fraction) if clock.len() == 8 && (1..=9).contains(&fraction.len()) => {
            let scale = 10u32.pow(9 - fraction.len() as u32);
            digits(fraction)? * scale
        }
        Some(_) => return None,
        None => 0,
    };

    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
}

/// `Z`, `±HH`, `±HHMM` or `±HH:MM`
fn parse_offset(s: &str) -> Option<FixedOffset> {
    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let sign = match &s[..1] {
        "+" => 1,
        "-" => -1,
        _ => return None,
    };
    let body = &s[1..];
    let (hours, minutes) = match body.len() {
        2 => (digits(body)?, 0),
        4 => (digits(&body[..2])?, digits(&body[2..])?),
        5 if &body[2..3] == ":" => (digits(&body[..2])?, digits(&body[3..])?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    let seconds = i32::try_from(hours * 3600 + minutes * 60).ok()?;
    FixedOffset::east_opt(sign * seconds)
}

/// Parses a run of ASCII digits; signs and whitespace are refused
fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
