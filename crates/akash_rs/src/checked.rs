//! Range-checked entry points.
//!
//! The core functions accept any `f64` and return garbage for garbage.
//! These wrappers reject out-of-domain input with an [`AkashError`]
//! before delegating.

use akash_bodies::{horizontal_moon_position, horizontal_sun_position};
use akash_frames::{HorizontalCoords, ObserverLocation};
use akash_time::{gregorian_date_time_to_julian_day, validate_calendar};

use crate::error::AkashError;

/// Reject a non-finite Julian Day or an observer off the globe.
pub fn check_inputs(jd: f64, observer: &ObserverLocation) -> Result<(), AkashError> {
    if !jd.is_finite() {
        return Err(AkashError::InvalidJulianDay(jd));
    }
    check_observer(observer)
}

pub fn check_observer(observer: &ObserverLocation) -> Result<(), AkashError> {
    if !observer.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&observer.latitude_deg) {
        return Err(AkashError::InvalidLocation(
            "latitude must be within [-90, 90] degrees",
        ));
    }
    if !observer.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&observer.longitude_deg)
    {
        return Err(AkashError::InvalidLocation(
            "longitude must be within [-180, 180] degrees",
        ));
    }
    Ok(())
}

/// Julian Day of a UT calendar instant, rejecting impossible fields.
pub fn julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<f64, AkashError> {
    validate_calendar(year, month, day, hour, minute, second)?;
    Ok(gregorian_date_time_to_julian_day(
        year, month, day, hour, minute, second,
    ))
}

pub fn sun_position(jd: f64, observer: &ObserverLocation) -> Result<HorizontalCoords, AkashError> {
    check_inputs(jd, observer)?;
    Ok(horizontal_sun_position(
        jd,
        observer.longitude_deg,
        observer.latitude_deg,
    ))
}

pub fn moon_position(jd: f64, observer: &ObserverLocation) -> Result<HorizontalCoords, AkashError> {
    check_inputs(jd, observer)?;
    Ok(horizontal_moon_position(
        jd,
        observer.longitude_deg,
        observer.latitude_deg,
    ))
}
