//! Calendar-day arithmetic for payment scheduling.
//!
//! Everything here works on [`NaiveDate`] (year, month, day with no time zone).
//! Instants only enter through [`to_calendar_day`], which truncates them to a
//! day in an explicit [`TimeBasis`].

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Utc};

use crate::errors::{MortgageError, Result};
use crate::types::{PaymentTiming, TimeBasis};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// first calendar day of the date's month
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.day0() as u64)
}

/// last calendar day of the date's month
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let last = days_in_month(date.year(), date.month());
    month_start(date) + Days::new((last - 1) as u64)
}

/// first day of the following month, `None` past the end of the calendar
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    month_end(date).checked_add_days(Days::new(1))
}

/// the day a payment for the given month posts
pub fn payment_date(month: NaiveDate, timing: PaymentTiming) -> NaiveDate {
    match timing {
        PaymentTiming::StartOfMonth => month_start(month),
        PaymentTiming::EndOfMonth => month_end(month),
    }
}

/// truncate an instant to its calendar day in the given basis
pub fn to_calendar_day(instant: DateTime<Utc>, basis: TimeBasis) -> NaiveDate {
    match basis {
        TimeBasis::Local => instant.with_timezone(&Local).date_naive(),
        TimeBasis::Utc => instant.date_naive(),
    }
}

/// parse a strict `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(MortgageError::InvalidDate {
            message: format!("expected YYYY-MM-DD, got {:?}", input),
        });
    }

    // all positions checked as ascii digits above
    let year: i32 = s[0..4].parse().map_err(|_| invalid_date(input))?;
    let month: u32 = s[5..7].parse().map_err(|_| invalid_date(input))?;
    let day: u32 = s[8..10].parse().map_err(|_| invalid_date(input))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| MortgageError::InvalidDate {
        message: format!("{} is not a calendar date", s),
    })
}

fn invalid_date(input: &str) -> MortgageError {
    MortgageError::InvalidDate {
        message: format!("expected YYYY-MM-DD, got {:?}", input),
    }
}

/// iterator over month starts from `from`'s month through `through`'s month
#[derive(Debug, Clone)]
pub struct Months {
    current: Option<NaiveDate>,
    stop: NaiveDate,
}

impl Months {
    pub fn between(from: NaiveDate, through: NaiveDate) -> Self {
        Self {
            current: Some(month_start(from)),
            stop: month_start(through),
        }
    }

    /// open-ended months starting at `from`'s month
    pub fn starting(from: NaiveDate) -> Self {
        Self {
            current: Some(month_start(from)),
            stop: NaiveDate::MAX,
        }
    }
}

impl Iterator for Months {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.current.filter(|month| *month <= self.stop)?;
        self.current = next_month(current);
        Some(current)
    }
}
