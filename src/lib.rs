//! # NOAA Sun
//!
//! Sunrise and sunset estimation with the NOAA approximate solar calculator.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The estimator is a closed-form formula: given a calendar day and an observer position it
//! returns the UTC times of sunrise and sunset, either of which may be absent during polar day
//! or polar night. It is stateless, never reads the clock and is safe to call from any thread.
//!
//! ## Features
//!
//! - Works in `std` and `no_std` builds, with or without `chrono`
//! - Official sunrise/sunset zenith plus civil, nautical and astronomical twilight
//! - Absent events carry the polar condition that caused them
//! - Optional helpers for the surrounding app: display formatting and public IP lookup
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions; enables [`display`]
//! - `chrono` (default): Enable the `Datelike`/`DateTime<Utc>` based API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `net`: Enable [`net`], an async public IP lookup built on `reqwest`
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! noaa-sun = "0.1"
//!
//! # Minimal no_std (numeric API only)
//! noaa-sun = { version = "0.1", default-features = false, features = ["libm"] }
//!
//! # With public IP lookup
//! noaa-sun = { version = "0.1", features = ["net"] }
//! ```
//!
//! ## References
//!
//! - Nautical Almanac Office (1990). *Almanac for Computers*. United States Naval Observatory.
//!
//! ## Quick Start
//!
//! ### Sunrise and sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use noaa_sun::noaa;
//!
//! // Vienna on the June solstice
//! let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
//! let events = noaa::compute_solar_events(date, 48.21, 16.37).unwrap();
//!
//! match (events.sunrise(), events.sunset()) {
//!     (Some(sunrise), Some(sunset)) => println!("sunrise {sunrise}, sunset {sunset}"),
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! # }
//! ```
//!
//! ### Sunrise and sunset (numeric API, no chrono)
//! ```rust
//! use noaa_sun::noaa;
//!
//! // Longyearbyen, Svalbard in midsummer
//! let events = noaa::sunrise_sunset_utc(2024, 6, 21, 78.22, 15.65).unwrap();
//! assert!(events.sunset().is_none());
//! assert!(events.is_polar_day());
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, North positive (-90 to +90)
//! - **Longitude**: degrees, East positive (-180 to +180)
//! - **Zenith**: 0° = directly overhead; sunrise/sunset uses 90.833°
//! - **Result dates**: the UTC time of day is attached to the caller's calendar date as-is

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{
    EventKind, EventOutcome, GeoCoordinate, HoursUtc, PolarCondition, SolarEvents, Zenith,
};

// Algorithm module
pub mod noaa;

// Core modules
pub mod error;
pub mod time;
pub mod types;

// Internal modules
mod math;

// App-facing helpers
#[cfg(feature = "std")]
pub mod display;
#[cfg(feature = "net")]
pub mod net;
