//! Calendar Utilities
//!
//! Month grids, date comparisons and D-day arithmetic. All functions work
//! on `NaiveDate`, so no time-of-day or DST offset ever leaks in.
//!
//! Months are 1-based throughout (1 = January).

use chrono::{Datelike, NaiveDate};

use crate::error::{PlannerError, PlannerResult};

/// One row of the grid, Sunday first. `None` marks a padding cell.
pub type Week = [Option<u32>; 7];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

fn first_of_month(year: i32, month: u32) -> PlannerResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(PlannerError::InvalidMonth(month))
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> PlannerResult<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let next = next.ok_or(PlannerError::InvalidMonth(month))?;
    Ok((next - first).num_days() as u32)
}

/// Build the week rows for a month.
///
/// Leading cells before the 1st and trailing cells after the last day are
/// `None`; every row has exactly seven cells.
pub fn month_grid(year: i32, month: u32) -> PlannerResult<Vec<Week>> {
    let first = first_of_month(year, month)?;
    let last_day = days_in_month(year, month)?;
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<u32>> = Vec::with_capacity(42);
    cells.extend(std::iter::repeat(None).take(lead));
    cells.extend((1..=last_day).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    Ok(cells
        .chunks(7)
        .map(|chunk| {
            let mut week: Week = [None; 7];
            week.copy_from_slice(chunk);
            week
        })
        .collect())
}

/// `YYYY-MM-DD`, zero-padded
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// True iff day/month/year match the reference date
pub fn is_today(day: u32, month: u32, year: i32, reference_today: NaiveDate) -> bool {
    reference_today.day() == day
        && reference_today.month() == month
        && reference_today.year() == year
}

/// Signed number of calendar days from `today` to `due_date`.
///
/// Negative means the date is past, zero is today.
pub fn day_diff(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Countdown badge text for a day difference
pub fn dday_label(diff: i64) -> String {
    match diff {
        0 => "D-DAY".to_string(),
        d if d > 0 => format!("D-{}", d),
        d => format!("D+{}", -d),
    }
}

/// The month shown by the calendar view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> PlannerResult<Self> {
        first_of_month(year, month)?;
        Ok(Self { year, month })
    }

    /// Cursor on the month containing `today`
    pub fn current(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Date of a day within this month, `None` if the day does not exist
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn weeks(&self) -> PlannerResult<Vec<Week>> {
        month_grid(self.year, self.month)
    }

    /// Heading text, e.g. "February 2024"
    pub fn label(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(month_grid(2024, 0), Err(PlannerError::InvalidMonth(0))));
        assert!(matches!(month_grid(2024, 13), Err(PlannerError::InvalidMonth(13))));
    }

    #[test]
    fn test_grid_february_2024() {
        // Feb 1st 2024 is a Thursday
        let grid = month_grid(2024, 2).unwrap();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(grid[4], [Some(25), Some(26), Some(27), Some(28), Some(29), None, None]);
    }

    #[test]
    fn test_grid_starting_on_sunday() {
        // Sep 1st 2024 is a Sunday
        let grid = month_grid(2024, 9).unwrap();
        assert_eq!(grid[0][0], Some(1));
    }

    #[test]
    fn test_grid_properties_for_every_month() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let grid = month_grid(year, month).unwrap();
                assert!(!grid.is_empty());

                let cells: Vec<Option<u32>> = grid.iter().flatten().copied().collect();
                assert_eq!(cells.len() % 7, 0);

                let days: Vec<u32> = cells.iter().flatten().copied().collect();
                let expected: Vec<u32> = (1..=days_in_month(year, month).unwrap()).collect();
                assert_eq!(days, expected, "{}-{}", year, month);

                let first_col = cells.iter().position(|c| c.is_some()).unwrap();
                let weekday = date(year, month, 1).weekday().num_days_from_sunday() as usize;
                assert_eq!(first_col, weekday, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(format_date(date(987, 12, 31)), "0987-12-31");
    }

    #[test]
    fn test_is_today() {
        let today = date(2024, 2, 10);
        assert!(is_today(10, 2, 2024, today));
        assert!(!is_today(10, 3, 2024, today));
        assert!(!is_today(11, 2, 2024, today));
        assert!(!is_today(10, 2, 2023, today));
    }

    #[test]
    fn test_day_diff() {
        let today = date(2024, 2, 10);
        assert_eq!(day_diff(date(2024, 2, 10), today), 0);
        assert_eq!(day_diff(date(2024, 2, 14), today), 4);
        assert_eq!(day_diff(date(2024, 2, 9), today), -1);
        // Crosses the US and EU spring DST switch
        assert_eq!(day_diff(date(2024, 4, 1), date(2024, 3, 1)), 31);
        assert_eq!(day_diff(date(2025, 2, 10), today), 366);
    }

    #[test]
    fn test_dday_label() {
        assert_eq!(dday_label(0), "D-DAY");
        assert_eq!(dday_label(4), "D-4");
        assert_eq!(dday_label(-2), "D+2");
    }

    #[test]
    fn test_cursor_wraps_years() {
        let dec = MonthCursor::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthCursor::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);

        let jan = MonthCursor::new(2024, 1).unwrap();
        assert_eq!(jan.prev(), MonthCursor::new(2023, 12).unwrap());
    }

    #[test]
    fn test_cursor_helpers() {
        let cursor = MonthCursor::current(date(2024, 2, 10));
        assert_eq!(cursor.label(), "February 2024");
        assert!(cursor.contains(date(2024, 2, 29)));
        assert!(!cursor.contains(date(2024, 3, 1)));
        assert_eq!(cursor.date_of(29), Some(date(2024, 2, 29)));
        assert_eq!(cursor.date_of(30), None);
        assert!(MonthCursor::new(2024, 13).is_err());
    }
}
