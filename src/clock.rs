use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;

use crate::calendar;
use crate::types::TimeBasis;

/// today's calendar day according to the time provider
pub fn today(time: &SafeTimeProvider, basis: TimeBasis) -> NaiveDate {
    calendar::to_calendar_day(time.now(), basis)
}

/// system clock provider
pub fn system_time() -> SafeTimeProvider {
    SafeTimeProvider::new(hourglass_rs::TimeSource::System)
}
