//! Apparent Sun position from the low-precision solar series.
//!
//! Mean longitude and mean anomaly are linear in days since J2000.0; the
//! equation of centre keeps the first two harmonics. Good to about 0.01°
//! in longitude between 1950 and 2050, and a fraction of a degree for
//! several centuries either side.

use akash_frames::{
    EclipticCoords, EquatorialCoords, HorizontalCoords, ecliptic_to_equatorial,
    equatorial_to_horizontal, mean_obliquity_deg, normalize_deg,
};
use akash_time::{J2000_JD, vernal_equinox_hour_angle_deg};

/// Ecliptic longitude/latitude of the Sun at `jd`. Latitude is always 0.
pub fn sun_ecliptic_position(jd: f64) -> EclipticCoords {
    let n = jd - J2000_JD;
    let mean_longitude = 280.460 + 0.985_647_4 * n;
    let mean_anomaly = (357.528 + 0.985_600_3 * n).to_radians();
    let lon = mean_longitude + 1.915 * mean_anomaly.sin() + 0.020 * (2.0 * mean_anomaly).sin();
    EclipticCoords {
        lon_deg: normalize_deg(lon),
        lat_deg: 0.0,
    }
}

/// Right ascension/declination of the Sun at `jd`.
pub fn sun_equatorial_position(jd: f64) -> EquatorialCoords {
    ecliptic_to_equatorial(&sun_ecliptic_position(jd), mean_obliquity_deg(jd))
}

/// Azimuth/altitude of the Sun for an observer at (`longitude_deg`, `latitude_deg`).
pub fn horizontal_sun_position(jd: f64, longitude_deg: f64, latitude_deg: f64) -> HorizontalCoords {
    equatorial_to_horizontal(
        vernal_equinox_hour_angle_deg(jd, longitude_deg),
        &sun_equatorial_position(jd),
        latitude_deg,
    )
}
