//! Ecliptic → equatorial rotation about the x-axis (vernal equinox).

use akash_time::J2000_JD;

use crate::spherical::{SphericalCoords, rectangular_to_spherical};

/// Mean obliquity at J2000.0, degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439;

/// Linear drift of the mean obliquity, degrees per day.
const OBLIQUITY_RATE_DEG_PER_DAY: f64 = -0.000_000_4;

/// Ecliptic longitude and latitude, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

/// Right ascension in [0, 360) and declination in [-90, 90], degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl EquatorialCoords {
    /// Right ascension in hours, [0, 24).
    pub fn ra_hours(&self) -> f64 {
        self.ra_deg / 15.0
    }
}

impl From<SphericalCoords> for EquatorialCoords {
    fn from(s: SphericalCoords) -> Self {
        Self {
            ra_deg: s.lon_deg,
            dec_deg: s.lat_deg,
        }
    }
}

/// Mean obliquity of the ecliptic at `jd`, low-precision linear model.
///
/// Good to a few arcseconds over a few centuries around J2000.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG_PER_DAY * (jd - J2000_JD)
}

/// Rotate ecliptic coordinates into the equatorial frame.
pub fn ecliptic_to_equatorial(ecl: &EclipticCoords, obliquity_deg: f64) -> EquatorialCoords {
    let (sin_lon, cos_lon) = ecl.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = ecl.lat_deg.to_radians().sin_cos();
    let (sin_eps, cos_eps) = obliquity_deg.to_radians().sin_cos();

    let x = cos_lon * cos_lat;
    let y = cos_eps * sin_lon * cos_lat - sin_eps * sin_lat;
    let z = sin_eps * sin_lon * cos_lat + cos_eps * sin_lat;

    rectangular_to_spherical(&[x, y, z]).into()
}
