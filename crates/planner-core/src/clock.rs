//! Wall Clock
//!
//! "Today" depends on the wall clock; everything that needs it takes a
//! `Clock` so tests can pin the date.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::calendar::format_date;

/// Source of the current date and instant
pub trait Clock {
    /// Current local calendar date
    fn today(&self) -> NaiveDate;

    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system (or browser) time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self { today, now }
    }

    /// Clock whose instant is midnight UTC of `today`
    pub fn on(today: NaiveDate) -> Self {
        let now = today.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
        Self { today, now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Current local date as `YYYY-MM-DD`
pub fn today_string(clock: &impl Clock) -> String {
    format_date(clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_string_is_zero_padded() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(today_string(&clock), "2024-03-05");
    }

    #[test]
    fn fixed_clock_instant_is_midnight() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(clock.now().to_rfc3339(), "2024-02-10T00:00:00+00:00");
    }
}
