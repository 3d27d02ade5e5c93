//! Calendar handling for the estimator.
//!
//! The NOAA formula only needs the day of the year, but results are stamped back onto the
//! caller's calendar day, so the full (year, month, day) triple is kept.

#[cfg(feature = "chrono")]
use crate::types::HoursUtc;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};

/// Cumulative day counts before each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Milliseconds per hour.
#[cfg(feature = "chrono")]
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A day in the observer's local (proleptic Gregorian) calendar.
///
/// Only the date matters; time of day is not represented.
///
/// # Example
/// ```
/// # use noaa_sun::time::CalendarDay;
/// let day = CalendarDay::new(2024, 3, 1).unwrap();
/// assert_eq!(day.day_of_year(), 61); // 2024 is a leap year
/// assert!(CalendarDay::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDay {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDay {
    /// Creates a calendar day from its components.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the month is outside 1-12 or the day does not exist in that
    /// month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Takes the calendar date of any chrono date-like value.
    ///
    /// For a `DateTime<Tz>` this is the date in `Tz`, i.e. the observer's local calendar day.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_date_like<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of the month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the ordinal day of the year, 1 for January 1st up to 366.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        let leap_day = if self.month > 2 && is_leap_year(self.year) {
            1
        } else {
            0
        };
        DAYS_BEFORE_MONTH[(self.month - 1) as usize] + self.day + leap_day
    }

    /// Attaches a UTC time of day to this calendar day.
    ///
    /// The hours are stamped onto this date as-is. Callers that passed a local date get a
    /// UTC instant on the same Y/M/D even when the observer's local event happens on the
    /// neighbouring UTC day. Sub-millisecond precision is truncated.
    ///
    /// Returns `None` only if the date lies outside chrono's representable range. `HoursUtc` is
    /// always finite, so the hours never fail the conversion.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn at_hours_utc(&self, hours: HoursUtc) -> Option<DateTime<Utc>> {
        let midnight = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(0, 0, 0)?
            .and_utc();
        let millis = (hours.hours() * MILLIS_PER_HOUR) as i64;
        midnight.checked_add_signed(TimeDelta::milliseconds(millis))
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self::from_date_like(&date)
    }
}

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for an invalid month.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
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
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_day_validation() {
        assert!(CalendarDay::new(2024, 1, 1).is_ok());
        assert!(CalendarDay::new(2024, 12, 31).is_ok());
        assert!(CalendarDay::new(2024, 2, 29).is_ok());

        assert!(CalendarDay::new(2024, 0, 1).is_err());
        assert!(CalendarDay::new(2024, 13, 1).is_err());
        assert!(CalendarDay::new(2024, 1, 0).is_err());
        assert!(CalendarDay::new(2024, 4, 31).is_err());
        assert!(CalendarDay::new(2023, 2, 29).is_err());
        assert!(CalendarDay::new(1900, 2, 29).is_err());
        assert!(CalendarDay::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_day_of_year() {
        let doy = |y, m, d| CalendarDay::new(y, m, d).unwrap().day_of_year();

        assert_eq!(doy(2023, 1, 1), 1);
        assert_eq!(doy(2023, 2, 1), 32);
        assert_eq!(doy(2023, 3, 1), 60);
        assert_eq!(doy(2024, 3, 1), 61);
        assert_eq!(doy(2024, 3, 20), 80);
        assert_eq!(doy(2023, 12, 31), 365);
        assert_eq!(doy(2024, 12, 31), 366);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_day_of_year_matches_chrono_ordinal() {
        let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        while date < end {
            assert_eq!(CalendarDay::from(date).day_of_year(), date.ordinal(), "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_at_hours_utc_stamps_same_date() {
        use chrono::TimeZone;

        let day = CalendarDay::new(2024, 6, 21).unwrap();
        let instant = day.at_hours_utc(HoursUtc::wrapping(3.5)).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 6, 21, 3, 30, 0).unwrap());

        let late = day.at_hours_utc(HoursUtc::wrapping(23.999_999_9)).unwrap();
        assert_eq!(late.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
    }
}
