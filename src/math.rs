//! Numeric helpers for the solar event estimator.
//!
//! The NOAA formulas are stated in degrees; every trigonometric helper here takes or returns
//! degrees and converts to radians at the call.

#![allow(clippy::many_single_char_names)]

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    wrap(degrees, 360.0)
}

/// Normalizes a time of day in hours to the range [0, 24).
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

fn wrap(value: f64, period: f64) -> f64 {
    let normalized = value % period;
    if normalized < 0.0 {
        // -1e-17 % 360 + 360 rounds to 360 itself
        let shifted = normalized + period;
        if shifted >= period { 0.0 } else { shifted }
    } else {
        normalized
    }
}

/// Start of the 90° quadrant containing `degrees`, e.g. 180 for 200°.
#[inline]
pub fn quadrant_start(degrees: f64) -> f64 {
    floor(degrees / 90.0) * 90.0
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arcsine in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Arccosine in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Arctangent in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
