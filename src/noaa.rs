//! NOAA approximate sunrise/sunset estimator.
//!
//! This follows the sunrise/sunset algorithm from the Nautical Almanac Office's *Almanac for
//! Computers* (1990), as published by NOAA. Accuracy is typically within a couple of minutes
//! between the polar circles; it degrades close to polar day/night transitions.
//!
//! Sunrise and sunset are computed independently of each other. Each event's UTC time of day
//! is attached to the caller's calendar date without moving it to the neighbouring day, so for
//! observers far from Greenwich an event can carry a UTC date that differs from its local date.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    acos_deg, asin_deg, atan_deg, cos_deg, normalize_degrees_0_to_360, quadrant_start, sin_deg,
    tan_deg,
};
use crate::time::CalendarDay;
use crate::types::{EventKind, EventOutcome, GeoCoordinate, HoursUtc, PolarCondition, Zenith};
use crate::{Result, SolarEvents};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Utc};

/// Degrees of mean anomaly per day.
const MEAN_ANOMALY_RATE: f64 = 0.9856;

/// Mean anomaly at day zero, in degrees.
const MEAN_ANOMALY_OFFSET: f64 = 3.289;

/// Longitude of perihelion, in degrees.
const PERIHELION_LONGITUDE: f64 = 282.634;

/// Cosine of the obliquity of the ecliptic.
const COS_OBLIQUITY: f64 = 0.91764;

/// Sine of the obliquity of the ecliptic.
const SIN_OBLIQUITY: f64 = 0.39782;

/// Degrees of rotation per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Calculate sunrise and sunset for a local calendar date.
///
/// Uses the official zenith of 90.833°. Each event is returned as a UTC instant on the same
/// year/month/day as `local_date`.
///
/// # Arguments
/// * `local_date` - Date in the observer's calendar; any time-of-day component is ignored
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, East positive)
///
/// # Returns
/// Sunrise and sunset, each absent when the sun does not cross the horizon that day
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use noaa_sun::noaa;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let events = noaa::compute_solar_events(date, 0.0, 0.0).unwrap();
///
/// let sunrise = events.sunrise().unwrap();
/// assert_eq!(sunrise.format("%H:%M").to_string(), "06:04");
/// ```
#[cfg(feature = "chrono")]
pub fn compute_solar_events<D: Datelike>(
    local_date: D,
    latitude: f64,
    longitude: f64,
) -> Result<SolarEvents<DateTime<Utc>>> {
    compute_solar_events_for_zenith(local_date, latitude, longitude, Zenith::Official)
}

/// Calculate the morning and evening crossings of an arbitrary zenith for a local date.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
/// or a custom zenith outside 0 to 180 degrees
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use noaa_sun::{noaa, Zenith};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let civil = noaa::compute_solar_events_for_zenith(date, 48.21, 16.37, Zenith::Civil).unwrap();
/// let official = noaa::compute_solar_events(date, 48.21, 16.37).unwrap();
///
/// // Civil dawn comes before sunrise
/// assert!(civil.sunrise().unwrap() < official.sunrise().unwrap());
/// ```
#[cfg(feature = "chrono")]
pub fn compute_solar_events_for_zenith<D: Datelike>(
    local_date: D,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SolarEvents<DateTime<Utc>>> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    let zenith = zenith.validated()?;
    let day = CalendarDay::from_date_like(&local_date);

    Ok(solar_events(day, coordinate, zenith).filter_map(|hours| day.at_hours_utc(hours)))
}

/// Calculate sunrise and sunset as hours after midnight UTC, without chrono.
///
/// # Arguments
/// * `year` - Year
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, East positive)
///
/// # Returns
/// `SolarEvents<HoursUtc>` with times in [0, 24) hours UTC
///
/// # Errors
/// Returns error for invalid date components or coordinates
///
/// # Example
/// ```
/// use noaa_sun::noaa;
///
/// let events = noaa::sunrise_sunset_utc(2024, 6, 21, 37.7749, -122.4194).unwrap();
///
/// // 05:48 PDT
/// assert_eq!(events.sunrise().unwrap().to_string(), "12:48");
/// // 20:35 PDT, which is already the next day in UTC
/// assert_eq!(events.sunset().unwrap().to_string(), "03:35");
/// ```
pub fn sunrise_sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<SolarEvents<HoursUtc>> {
    sunrise_sunset_utc_for_zenith(year, month, day, latitude, longitude, Zenith::Official)
}

/// Calculate horizon crossings for a specific zenith as hours after midnight UTC.
///
/// # Errors
/// Returns error for invalid date components, coordinates or custom zenith.
///
/// # Example
/// ```rust
/// use noaa_sun::{noaa, Zenith};
///
/// let twilight = noaa::sunrise_sunset_utc_for_zenith(
///     2024, 12, 21,
///     48.21, 16.37,
///     Zenith::Nautical,
/// ).unwrap();
/// assert!(twilight.is_regular_day());
/// ```
pub fn sunrise_sunset_utc_for_zenith(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SolarEvents<HoursUtc>> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    let day = CalendarDay::new(year, month, day)?;
    let zenith = zenith.validated()?;

    Ok(solar_events(day, coordinate, zenith))
}

/// Calculate both events for already validated inputs.
#[must_use]
pub fn solar_events(
    day: CalendarDay,
    coordinate: GeoCoordinate,
    zenith: Zenith,
) -> SolarEvents<HoursUtc> {
    SolarEvents::from_outcomes(
        event_hours(day, coordinate, EventKind::Sunrise, zenith),
        event_hours(day, coordinate, EventKind::Sunset, zenith),
    )
}

/// Calculate a single sunrise or sunset.
///
/// Returns the UTC time of day, or the polar condition that prevents the event.
///
/// # Example
/// ```
/// use noaa_sun::noaa::event_hours;
/// use noaa_sun::time::CalendarDay;
/// use noaa_sun::{EventKind, EventOutcome, GeoCoordinate, PolarCondition, Zenith};
///
/// let midsummer = CalendarDay::new(2024, 6, 21).unwrap();
/// let svalbard = GeoCoordinate::new(78.22, 15.65).unwrap();
///
/// let sunset = event_hours(midsummer, svalbard, EventKind::Sunset, Zenith::Official);
/// assert_eq!(sunset, EventOutcome::Absent(PolarCondition::PolarDay));
/// ```
#[must_use]
pub fn event_hours(
    day: CalendarDay,
    coordinate: GeoCoordinate,
    kind: EventKind,
    zenith: Zenith,
) -> EventOutcome {
    let hours_west = coordinate.hours_west();

    // Approximate time of the event in days since the start of the year
    let t = f64::from(day.day_of_year()) + (kind.approximate_local_hour() + hours_west) / 24.0;

    // Sun's mean anomaly and true longitude
    let m = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;
    let l = normalize_degrees_0_to_360(
        m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + PERIHELION_LONGITUDE,
    );

    // Right ascension, moved into the same quadrant as L
    let mut ra = normalize_degrees_0_to_360(atan_deg(COS_OBLIQUITY * tan_deg(l)));
    ra += quadrant_start(l) - quadrant_start(ra);
    let ra_hours = ra / DEGREES_PER_HOUR;

    // Declination
    let sin_dec = SIN_OBLIQUITY * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    let cos_h = (cos_deg(zenith.degrees()) - sin_dec * sin_deg(coordinate.latitude()))
        / (cos_dec * cos_deg(coordinate.latitude()));

    // NaN only comes from a non-finite custom zenith
    if cos_h > 1.0 || cos_h.is_nan() {
        return EventOutcome::Absent(PolarCondition::PolarNight);
    }
    if cos_h < -1.0 {
        return EventOutcome::Absent(PolarCondition::PolarDay);
    }

    let h = match kind {
        EventKind::Sunrise => 360.0 - acos_deg(cos_h),
        EventKind::Sunset => acos_deg(cos_h),
    } / DEGREES_PER_HOUR;

    // Local mean time of the event, then back to UTC
    let local_mean_time = h + ra_hours - 0.06571 * t - 6.622;
    EventOutcome::Occurs(HoursUtc::wrapping(local_mean_time + hours_west))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(y: i32, m: u32, d: u32, lat: f64, lon: f64, kind: EventKind) -> EventOutcome {
        event_hours(
            CalendarDay::new(y, m, d).unwrap(),
            GeoCoordinate::new(lat, lon).unwrap(),
            kind,
            Zenith::Official,
        )
    }

    fn hours(y: i32, m: u32, d: u32, lat: f64, lon: f64, kind: EventKind) -> f64 {
        outcome(y, m, d, lat, lon, kind)
            .time()
            .expect("event should occur")
            .hours()
    }

    #[test]
    fn test_equinox_at_null_island() {
        let sunrise = hours(2024, 3, 20, 0.0, 0.0, EventKind::Sunrise);
        let sunset = hours(2024, 3, 20, 0.0, 0.0, EventKind::Sunset);

        // 06:04:05 and 18:10:36 UTC
        assert!((sunrise - 6.068).abs() < 0.01, "sunrise {sunrise}");
        assert!((sunset - 18.177).abs() < 0.01, "sunset {sunset}");
    }

    #[test]
    fn test_polar_outcomes() {
        assert_eq!(
            outcome(2024, 6, 21, 78.0, 15.0, EventKind::Sunset),
            EventOutcome::Absent(PolarCondition::PolarDay)
        );
        assert_eq!(
            outcome(2024, 6, 21, 78.0, 15.0, EventKind::Sunrise),
            EventOutcome::Absent(PolarCondition::PolarDay)
        );
        assert_eq!(
            outcome(2024, 12, 21, 78.0, 15.0, EventKind::Sunrise),
            EventOutcome::Absent(PolarCondition::PolarNight)
        );
        assert_eq!(
            outcome(2024, 6, 21, -78.0, 0.0, EventKind::Sunrise),
            EventOutcome::Absent(PolarCondition::PolarNight)
        );
    }

    #[test]
    fn test_poles_never_produce_non_finite_times() {
        for (m, d) in [(3, 20), (6, 21), (9, 22), (12, 21)] {
            for lat in [-90.0, 90.0] {
                for kind in [EventKind::Sunrise, EventKind::Sunset] {
                    if let EventOutcome::Occurs(t) = outcome(2024, m, d, lat, 0.0, kind) {
                        assert!(t.hours().is_finite());
                    }
                }
            }
        }
    }

    #[test]
    fn test_east_is_earlier() {
        let greenwich = hours(2024, 3, 20, 0.0, 0.0, EventKind::Sunrise);
        let east = hours(2024, 3, 20, 0.0, 15.0, EventKind::Sunrise);
        let west = hours(2024, 3, 20, 0.0, -15.0, EventKind::Sunrise);

        assert!((greenwich - east - 1.0).abs() < 0.01);
        assert!((west - greenwich - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_twilight_brackets_sunrise() {
        let day = CalendarDay::new(2024, 9, 22).unwrap();
        let greenwich = GeoCoordinate::new(51.4779, 0.0).unwrap();

        let sunrise = |zenith| {
            event_hours(day, greenwich, EventKind::Sunrise, zenith)
                .time()
                .unwrap()
                .hours()
        };

        let official = sunrise(Zenith::Official);
        let civil = sunrise(Zenith::Civil);
        let nautical = sunrise(Zenith::Nautical);
        let astronomical = sunrise(Zenith::Astronomical);

        assert!(astronomical < nautical);
        assert!(nautical < civil);
        assert!(civil < official);
    }

    #[test]
    fn test_numeric_api_validation() {
        assert!(sunrise_sunset_utc(2024, 6, 21, 91.0, 0.0).is_err());
        assert!(sunrise_sunset_utc(2024, 6, 21, 0.0, -181.0).is_err());
        assert!(sunrise_sunset_utc(2023, 2, 29, 0.0, 0.0).is_err());
        assert!(sunrise_sunset_utc(2024, 13, 1, 0.0, 0.0).is_err());
        assert!(
            sunrise_sunset_utc_for_zenith(2024, 6, 21, 0.0, 0.0, Zenith::Custom(200.0)).is_err()
        );
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_api_matches_numeric_api() {
        use chrono::{NaiveDate, Timelike};

        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let instants = compute_solar_events(date, 48.21, 16.37).unwrap();
        let numeric = sunrise_sunset_utc(2024, 6, 21, 48.21, 16.37).unwrap();

        let sunrise = instants.sunrise().unwrap();
        let (h, m, _) = numeric.sunrise().unwrap().hms();
        assert_eq!(sunrise.date_naive(), date);
        assert_eq!((sunrise.hour(), sunrise.minute()), (h, m));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_api_rejects_bad_coordinates() {
        use chrono::NaiveDate;

        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert!(compute_solar_events(date, 90.1, 0.0).is_err());
        assert!(compute_solar_events(date, 0.0, f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_api_rejects_bad_custom_zenith() {
        use crate::Error;
        use chrono::NaiveDate;

        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        for angle in [f64::NAN, 200.0, -0.5, f64::INFINITY] {
            let result = compute_solar_events_for_zenith(date, 0.0, 0.0, Zenith::Custom(angle));
            assert!(
                matches!(result, Err(Error::InvalidZenith { .. })),
                "zenith {angle}: {result:?}"
            );
        }

        // 05:27 UTC, before official sunrise
        let dawn = compute_solar_events_for_zenith(date, 0.0, 0.0, Zenith::Custom(100.0)).unwrap();
        assert_eq!(dawn.sunrise().unwrap().format("%H:%M").to_string(), "05:27");
    }

    #[test]
    fn test_non_finite_zenith_never_produces_a_time() {
        let day = CalendarDay::new(2024, 3, 20).unwrap();
        let null_island = GeoCoordinate::new(0.0, 0.0).unwrap();

        for angle in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let events = solar_events(day, null_island, Zenith::Custom(angle));
            assert_eq!(events.sunrise(), None, "zenith {angle}");
            assert_eq!(events.sunset(), None, "zenith {angle}");
            assert!(events.is_polar_night());
        }
    }
}
