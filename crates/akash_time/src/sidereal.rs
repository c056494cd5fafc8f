//! Hour angle of the vernal equinox (local mean sidereal angle).
//!
//! θ = 280.46061837° + 360.98564736629° × (JD − 2451545.0) + λ
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 12.4.
//!
//! The product of a day count and the sidereal rate is the one operation
//! here where ordinary `f64` arithmetic falls apart: 10^6 days × 361°/day
//! leaves only ~7 significant digits for the fractional turn. The sum is
//! formed and reduced modulo 360° in [`DoubleDouble`] before rounding.

use crate::julian::J2000_JD;
use crate::precise::DoubleDouble;

/// Mean sidereal angle at J2000.0 for the Greenwich meridian, degrees.
pub const SIDEREAL_ANGLE_J2000_DEG: f64 = 280.460_618_37;

/// Mean sidereal rotation rate, degrees per day.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Hour angle of the vernal equinox for an observer at east longitude
/// `longitude_deg`, in degrees in `[0, 360)`.
pub fn vernal_equinox_hour_angle_deg(jd: f64, longitude_deg: f64) -> f64 {
    vernal_equinox_hour_angle_precise(DoubleDouble::from(jd), longitude_deg)
}

/// As [`vernal_equinox_hour_angle_deg`], for a Julian Day that is already
/// carried in extended precision.
pub fn vernal_equinox_hour_angle_precise(jd: DoubleDouble, longitude_deg: f64) -> f64 {
    let days = jd - J2000_JD;
    let angle = days * SIDEREAL_RATE_DEG_PER_DAY + SIDEREAL_ANGLE_J2000_DEG + longitude_deg;
    let reduced = angle.rem_euclid(360.0).to_f64();
    // Rounding the last ulp can land exactly on 360.
    if reduced >= 360.0 { 0.0 } else { reduced }
}

/// Greenwich mean sidereal angle, degrees in `[0, 360)`.
pub fn greenwich_sidereal_angle_deg(jd: f64) -> f64 {
    vernal_equinox_hour_angle_deg(jd, 0.0)
}
