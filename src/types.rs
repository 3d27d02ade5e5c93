//! Core data types for sunrise/sunset estimation.

use crate::error::{check_coordinates, check_zenith};
use crate::math::{floor, normalize_hours_0_to_24};
use crate::Result;
use core::fmt;

/// An observer position on Earth.
///
/// Latitude is North-positive, longitude is East-positive, both in degrees.
///
/// # Example
/// ```
/// # use noaa_sun::GeoCoordinate;
/// let vienna = GeoCoordinate::new(48.21, 16.37).unwrap();
/// assert_eq!(vienna.latitude(), 48.21);
/// assert!(GeoCoordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate after range-checking both components.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (-90 to +90, North positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180, East positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the longitude as hours West of Greenwich, the convention of the NOAA formulas.
    #[must_use]
    pub fn hours_west(&self) -> f64 {
        -self.longitude / 15.0
    }
}

/// Zenith angle at which the sun is considered to cross the horizon.
///
/// Measured from straight up, so larger values mean the sun is further below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Zenith {
    /// Sunrise/sunset: upper limb on the horizon, including refraction (90°50′)
    #[default]
    Official,
    /// Civil twilight (sun 6° below the horizon)
    Civil,
    /// Nautical twilight (sun 12° below the horizon)
    Nautical,
    /// Astronomical twilight (sun 18° below the horizon)
    Astronomical,
    /// Custom zenith angle in degrees
    Custom(f64),
}

impl Zenith {
    /// Gets the zenith angle in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Official => 90.833,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom zenith with the specified angle.
    ///
    /// # Errors
    /// Returns `InvalidZenith` if the angle is outside 0 to 180 degrees.
    pub fn custom(degrees: f64) -> Result<Self> {
        check_zenith(degrees)?;
        Ok(Self::Custom(degrees))
    }

    /// Checks a zenith that may have been built as `Zenith::Custom` directly.
    ///
    /// # Errors
    /// Returns `InvalidZenith` if a custom angle is outside 0 to 180 degrees or not finite.
    pub fn validated(self) -> Result<Self> {
        if let Self::Custom(degrees) = self {
            check_zenith(degrees)?;
        }
        Ok(self)
    }
}

/// Which crossing of the horizon is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Morning crossing
    Sunrise,
    /// Evening crossing
    Sunset,
}

impl EventKind {
    /// Local hour around which the event is first approximated.
    pub(crate) const fn approximate_local_hour(self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }
}

/// Why an event does not happen on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// The sun stays above the horizon all day; it never sets.
    PolarDay,
    /// The sun stays below the horizon all day; it never rises.
    PolarNight,
}

/// Time of day in hours after 00:00 UTC, always within [0, 24).
///
/// # Example
/// ```
/// # use noaa_sun::HoursUtc;
/// let t = HoursUtc::from_hours(30.5).unwrap();
/// assert_eq!(t.hours(), 6.5);
/// assert_eq!(t.to_string(), "06:30");
/// assert!(HoursUtc::from_hours(f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a time of day, wrapping the value into [0, 24).
    ///
    /// Returns `None` for NaN or infinite hours.
    #[must_use]
    pub fn from_hours(hours: f64) -> Option<Self> {
        hours.is_finite().then(|| Self::wrapping(hours))
    }

    /// Wraps hours already known to be finite.
    pub(crate) fn wrapping(hours: f64) -> Self {
        debug_assert!(hours.is_finite(), "non-finite hours: {hours}");
        Self(normalize_hours_0_to_24(hours))
    }

    /// Gets the hours after midnight UTC.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits into whole hours, whole minutes and (fractional) seconds.
    ///
    /// # Example
    /// ```
    /// # use noaa_sun::HoursUtc;
    /// let (h, m, s) = HoursUtc::from_hours(6.0675).unwrap().hms();
    /// assert_eq!((h, m), (6, 4));
    /// assert!((s - 3.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn hms(&self) -> (u32, u32, f64) {
        let hours = floor(self.0);
        let minutes_total = (self.0 - hours) * 60.0;
        let minutes = floor(minutes_total);
        let seconds = (minutes_total - minutes) * 60.0;
        (hours as u32, minutes as u32, seconds)
    }
}

impl fmt::Display for HoursUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, _) = self.hms();
        write!(f, "{hours:02}:{minutes:02}")
    }
}

/// Outcome of computing a single event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// The event happens at this UTC time of day.
    Occurs(HoursUtc),
    /// The event does not happen on this day.
    Absent(PolarCondition),
}

impl EventOutcome {
    /// Gets the time if the event happens.
    #[must_use]
    pub const fn time(&self) -> Option<HoursUtc> {
        match self {
            Self::Occurs(hours) => Some(*hours),
            Self::Absent(_) => None,
        }
    }

    /// Gets the reason if the event does not happen.
    #[must_use]
    pub const fn polar_condition(&self) -> Option<PolarCondition> {
        match self {
            Self::Occurs(_) => None,
            Self::Absent(condition) => Some(*condition),
        }
    }
}

/// Sunrise and sunset for one day, each possibly absent.
///
/// `T` is [`HoursUtc`] for the numeric API and `chrono::DateTime<Utc>` for the chrono API.
/// An absent event is a normal outcome at high latitudes, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEvents<T> {
    sunrise: Option<T>,
    sunset: Option<T>,
    polar: Option<PolarCondition>,
}

impl SolarEvents<HoursUtc> {
    /// Combines two independently computed events.
    ///
    /// The recorded polar condition is the sunrise's if sunrise is absent, else the sunset's.
    #[must_use]
    pub fn from_outcomes(sunrise: EventOutcome, sunset: EventOutcome) -> Self {
        Self {
            sunrise: sunrise.time(),
            sunset: sunset.time(),
            polar: sunrise.polar_condition().or_else(|| sunset.polar_condition()),
        }
    }
}

impl<T> SolarEvents<T> {
    /// Gets the sunrise, if the sun rises on this day.
    pub const fn sunrise(&self) -> Option<&T> {
        self.sunrise.as_ref()
    }

    /// Gets the sunset, if the sun sets on this day.
    pub const fn sunset(&self) -> Option<&T> {
        self.sunset.as_ref()
    }

    /// Gets the polar condition explaining a missing event, if any.
    pub const fn polar_condition(&self) -> Option<PolarCondition> {
        self.polar
    }

    /// Checks if both sunrise and sunset happen.
    pub const fn is_regular_day(&self) -> bool {
        self.sunrise.is_some() && self.sunset.is_some()
    }

    /// Checks if a missing event is due to the sun never setting.
    pub fn is_polar_day(&self) -> bool {
        self.polar == Some(PolarCondition::PolarDay)
    }

    /// Checks if a missing event is due to the sun never rising.
    pub fn is_polar_night(&self) -> bool {
        self.polar == Some(PolarCondition::PolarNight)
    }

    /// Converts both event times, keeping the polar condition.
    ///
    /// An event whose conversion returns `None` becomes absent.
    pub fn filter_map<U, F>(self, mut f: F) -> SolarEvents<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        SolarEvents {
            sunrise: self.sunrise.and_then(&mut f),
            sunset: self.sunset.and_then(&mut f),
            polar: self.polar,
        }
    }

    /// Splits into `(sunrise, sunset)`.
    pub fn into_pair(self) -> (Option<T>, Option<T>) {
        (self.sunrise, self.sunset)
    }
}
