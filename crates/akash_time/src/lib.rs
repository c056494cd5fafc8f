//! Julian Day conversion, sidereal angle and the simulated clock.
//!
//! This crate provides:
//! - Proleptic Gregorian ↔ Julian Day conversion (integer-day and
//!   fractional-time variants)
//! - The hour angle of the vernal equinox (mean sidereal angle)
//! - `SimulatedClock`, a rebasable clock with an adjustable, reversible rate
//! - `DoubleDouble`, the extended-precision type used wherever a Julian
//!   Day is combined with a small offset or multiplied by a rate
//!
//! Every function is total: out-of-range inputs give meaningless but
//! finite-or-NaN results, never a panic.

pub mod clock;
pub mod error;
pub mod julian;
pub mod precise;
pub mod sidereal;

pub use clock::{ClockState, SimulatedClock};
pub use error::TimeError;
pub use julian::{
    GregorianDate, GregorianDateTime, J2000_JD, JULIAN_CENTURY_DAYS, SECONDS_PER_DAY,
    days_in_month, gregorian_date_time_to_julian_day, gregorian_date_time_to_julian_day_precise,
    gregorian_date_to_julian_day, is_leap_year, julian_centuries_since_j2000,
    julian_day_to_gregorian_date, julian_day_to_gregorian_date_time, validate_calendar,
};
pub use precise::DoubleDouble;
pub use sidereal::{
    SIDEREAL_ANGLE_J2000_DEG, SIDEREAL_RATE_DEG_PER_DAY, greenwich_sidereal_angle_deg,
    vernal_equinox_hour_angle_deg, vernal_equinox_hour_angle_precise,
};
