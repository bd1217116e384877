use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use time::{Date, Month, OffsetDateTime};

use crate::ValidationError;

/// Two-digit years above the pivot resolve to 19xx, the rest to 20xx.
/// Fixed legacy convention, not configurable.
const CENTURY_PIVOT: u32 = 79;

/// Canonical `YYYY-MM-DD` calendar date, never later than the reference
/// "today". "Today" is always evaluated in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateDate(Date);

impl RateDate {
    /// Parse a loosely-formatted date token into a canonical date.
    ///
    /// Accepts `YYYY MM DD` and `YY MM DD` digit groups with any run of
    /// `-`, `/`, `.` between the groups, including fully concatenated 8- or
    /// 6-digit forms. The whole input must match; leading or trailing
    /// garbage is rejected. A date equal to `today` is accepted.
    pub fn normalize(input: &str, today: Date) -> Result<Self, ValidationError> {
        let (year, month, day) = match_date_shape(input, 4)
            .or_else(|| match_date_shape(input, 2))
            .ok_or_else(|| ValidationError::DateMalformed {
                input: input.to_owned(),
            })?;

        let month = Month::try_from(month).map_err(|_| ValidationError::DateImpossible {
            input: input.to_owned(),
        })?;
        let date = Date::from_calendar_date(year, month, day).map_err(|_| {
            ValidationError::DateImpossible {
                input: input.to_owned(),
            }
        })?;

        // The pivot expansion above can itself land in the future ("790101"
        // resolves to 2079); this check still applies to that result.
        if date > today {
            return Err(ValidationError::DateInFuture {
                date: Self(date).to_string(),
                today: Self(today).to_string(),
            });
        }

        Ok(Self(date))
    }

    /// Current calendar date in UTC.
    pub fn today_utc() -> Date {
        OffsetDateTime::now_utc().date()
    }

    pub const fn as_date(&self) -> Date {
        self.0
    }
}

impl Display for RateDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl Serialize for RateDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Match the whole input against `(year: year_len)(sep*)(month: 2)(sep*)(day: 2)`.
fn match_date_shape(input: &str, year_len: usize) -> Option<(i32, u8, u8)> {
    let bytes = input.as_bytes();
    let (year, rest) = take_digits(bytes, year_len)?;
    let rest = skip_separators(rest);
    let (month, rest) = take_digits(rest, 2)?;
    let rest = skip_separators(rest);
    let (day, rest) = take_digits(rest, 2)?;
    if !rest.is_empty() {
        return None;
    }

    let year = if year_len == 2 {
        expand_two_digit_year(year)
    } else {
        year as i32
    };

    Some((year, month as u8, day as u8))
}

/// Take exactly `count` ASCII digits from the front, returning their value
/// and the remainder.
fn take_digits(bytes: &[u8], count: usize) -> Option<(u32, &[u8])> {
    if bytes.len() < count {
        return None;
    }
    let (head, tail) = bytes.split_at(count);
    let mut value = 0u32;
    for &byte in head {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(byte - b'0');
    }
    Some((value, tail))
}

fn skip_separators(bytes: &[u8]) -> &[u8] {
    let offset = bytes
        .iter()
        .take_while(|byte| matches!(byte, b'-' | b'/' | b'.'))
        .count();
    &bytes[offset..]
}

fn expand_two_digit_year(year: u32) -> i32 {
    if year > CENTURY_PIVOT {
        (1900 + year) as i32
    } else {
        (2000 + year) as i32
    }
}
