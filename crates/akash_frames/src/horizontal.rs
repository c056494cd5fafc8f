//! Equatorial → local horizontal (azimuth/altitude).

use serde::{Deserialize, Serialize};

use crate::ecliptic::EquatorialCoords;
use crate::spherical::{normalize_deg, rectangular_to_spherical};

/// Geographic position of an observer on Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// Geodetic latitude, degrees, north positive. Range [-90, 90].
    pub latitude_deg: f64,
    /// Longitude, degrees, east positive. Range [-180, 180].
    pub longitude_deg: f64,
}

impl ObserverLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Both angles finite and inside their geographic ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude_deg.is_finite()
            && self.longitude_deg.is_finite()
            && (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
    }
}

/// Azimuth measured from north through east, [0, 360); altitude above
/// the horizon, [-90, 90]. Degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    pub azimuth_deg: f64,
    pub altitude_deg: f64,
}

impl HorizontalCoords {
    /// Unit direction in the local east-north-up frame.
    pub fn to_enu(&self) -> [f64; 3] {
        let (sin_az, cos_az) = self.azimuth_deg.to_radians().sin_cos();
        let (sin_alt, cos_alt) = self.altitude_deg.to_radians().sin_cos();
        [cos_alt * sin_az, cos_alt * cos_az, sin_alt]
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

/// Convert equatorial coordinates to the observer's horizon.
///
/// `equinox_hour_angle_deg` is the local hour angle of the vernal equinox
/// (local sidereal time in degrees). `latitude_deg` is the observer's
/// latitude.
pub fn equatorial_to_horizontal(
    equinox_hour_angle_deg: f64,
    eq: &EquatorialCoords,
    latitude_deg: f64,
) -> HorizontalCoords {
    let (sin_h, cos_h) = (equinox_hour_angle_deg - eq.ra_deg).to_radians().sin_cos();
    let (sin_dec, cos_dec) = eq.dec_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = latitude_deg.to_radians().sin_cos();

    // Hour-angle frame: x toward the meridian, y toward the west, z to the pole.
    let x = cos_h * cos_dec;
    let y = sin_h * cos_dec;
    let z = sin_dec;

    // Tilt by the colatitude; x now points to the south point, z to the zenith.
    let x_hor = x * sin_lat - z * cos_lat;
    let z_hor = x * cos_lat + z * sin_lat;

    let s = rectangular_to_spherical(&[x_hor, y, z_hor]);
    HorizontalCoords {
        azimuth_deg: normalize_deg(s.lon_deg + 180.0),
        altitude_deg: s.lat_deg,
    }
}
