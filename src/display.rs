//! Text renditions of estimator results and device readings.
//!
//! Every helper takes the value to show explicitly and renders a missing value as
//! [`PLACEHOLDER`].

use crate::types::{GeoCoordinate, HoursUtc};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};
#[cfg(feature = "chrono")]
use core::fmt::Display;

/// Shown in place of a value that is not available.
pub const PLACEHOLDER: &str = "—";

/// Meters per second to kilometers per hour.
const MPS_TO_KMH: f64 = 3.6;

/// Formats an event instant as `HH:MM:SS` in its own time zone.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use noaa_sun::display::format_event;
///
/// let sunrise = Utc.with_ymd_and_hms(2024, 3, 20, 6, 4, 4).unwrap();
/// assert_eq!(format_event(Some(&sunrise)), "06:04:04");
/// assert_eq!(format_event::<Utc>(None), "—");
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn format_event<Tz: TimeZone>(event: Option<&DateTime<Tz>>) -> String
where
    Tz::Offset: Display,
{
    event.map_or_else(
        || PLACEHOLDER.to_owned(),
        |instant| instant.format("%H:%M:%S").to_string(),
    )
}

/// Formats an event time of day as `HH:MM` UTC.
#[must_use]
pub fn format_event_hours(event: Option<HoursUtc>) -> String {
    event.map_or_else(|| PLACEHOLDER.to_owned(), |hours| hours.to_string())
}

/// Formats a coordinate as `latitude, longitude` with five decimals.
///
/// # Example
/// ```
/// use noaa_sun::GeoCoordinate;
/// use noaa_sun::display::format_coordinates;
///
/// let c = GeoCoordinate::new(37.7749, -122.4194).unwrap();
/// assert_eq!(format_coordinates(Some(c)), "37.77490, -122.41940");
/// ```
#[must_use]
pub fn format_coordinates(coordinate: Option<GeoCoordinate>) -> String {
    coordinate.map_or_else(
        || PLACEHOLDER.to_owned(),
        |c| format!("{:.5}, {:.5}", c.latitude(), c.longitude()),
    )
}

/// Formats a ground speed given in m/s as km/h with one decimal.
///
/// Negative speeds mark an invalid reading and are shown as missing.
#[must_use]
pub fn format_speed(meters_per_second: Option<f64>) -> String {
    match meters_per_second {
        Some(speed) if speed >= 0.0 => format!("{:.1} km/h", speed * MPS_TO_KMH),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Formats a course over ground in whole degrees.
///
/// Negative courses mark an invalid reading and are shown as missing.
#[must_use]
pub fn format_course(degrees: Option<f64>) -> String {
    match degrees {
        Some(course) if course >= 0.0 => format!("{course:.0}°"),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Personalized greeting for a display name; `None` while the name is empty.
///
/// # Example
/// ```
/// use noaa_sun::display::greeting;
///
/// assert_eq!(greeting("Ada").as_deref(), Some("Hello, Ada!"));
/// assert_eq!(greeting(""), None);
/// ```
#[must_use]
pub fn greeting(name: &str) -> Option<String> {
    (!name.is_empty()).then(|| format!("Hello, {name}!"))
}
