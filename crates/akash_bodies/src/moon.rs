//! Apparent Moon position from a truncated Van Flandern–Pulkkinen series.
//!
//! Arguments and amplitudes are in radians, time in Julian centuries
//! since J2000.0. Accuracy is a few tenths of a degree, which is all a
//! sky renderer needs.

use akash_frames::{
    EclipticCoords, EquatorialCoords, HorizontalCoords, ecliptic_to_equatorial,
    equatorial_to_horizontal, mean_obliquity_deg, normalize_deg,
};
use akash_time::{julian_centuries_since_j2000, vernal_equinox_hour_angle_deg};

/// Fundamental arguments of the lunar theory at `t` centuries, radians.
#[derive(Debug, Clone, Copy)]
struct LunarArguments {
    /// Moon mean longitude.
    l_moon: f64,
    /// Moon mean anomaly.
    m_moon: f64,
    /// Sun mean anomaly.
    m_sun: f64,
    /// Mean elongation of the Moon from the Sun.
    d: f64,
    /// Argument of latitude (distance from the ascending node).
    f: f64,
}

impl LunarArguments {
    fn at(t: f64) -> Self {
        Self {
            l_moon: 3.8104 + 8399.7091 * t,
            m_moon: 2.3554 + 8328.6911 * t,
            m_sun: 6.2401 + 628.3019 * t,
            d: 5.1985 + 7771.3772 * t,
            f: 1.6280 + 8433.4663 * t,
        }
    }

    /// Sum `amplitude * sin(nD·D + nM·M + nM'·M' + nF·F)` over `terms`.
    fn series(&self, terms: &[[f64; 5]]) -> f64 {
        terms
            .iter()
            .map(|&[nd, nm, nmp, nf, amp]| {
                amp * (nd * self.d + nm * self.m_sun + nmp * self.m_moon + nf * self.f).sin()
            })
            .sum()
    }
}

#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 13] = [
    // nD    nM    nM'   nF    amplitude (rad)
    [ 0.0,  0.0,  1.0,  0.0,  0.1098],
    [ 2.0,  0.0, -1.0,  0.0,  0.0222],
    [ 2.0,  0.0,  0.0,  0.0,  0.0115],
    [ 0.0,  0.0,  2.0,  0.0,  0.0037],
    [ 0.0,  1.0,  0.0,  0.0, -0.0032],
    [ 0.0,  0.0,  0.0,  2.0, -0.0020],
    [ 2.0,  0.0, -2.0,  0.0,  0.0010],
    [ 2.0, -1.0, -1.0,  0.0,  0.0010],
    [ 2.0,  0.0,  1.0,  0.0,  0.0009],
    [ 2.0, -1.0,  0.0,  0.0,  0.0008],
    [ 0.0, -1.0,  1.0,  0.0,  0.0007],
    [ 1.0,  0.0,  0.0,  0.0, -0.0006],
    [ 0.0,  1.0,  1.0,  0.0, -0.0005],
];

#[rustfmt::skip]
static LATITUDE_TERMS: [[f64; 5]; 7] = [
    // nD    nM    nM'   nF    amplitude (rad)
    [ 0.0,  0.0,  0.0,  1.0,  0.0895],
    [ 0.0,  0.0,  1.0,  1.0,  0.0049],
    [ 0.0,  0.0,  1.0, -1.0,  0.0048],
    [ 2.0,  0.0,  0.0, -1.0,  0.0030],
    [ 2.0,  0.0, -1.0,  1.0,  0.0010],
    [ 2.0,  0.0, -1.0, -1.0,  0.0008],
    [ 2.0,  0.0,  0.0,  1.0,  0.0006],
];

/// Ecliptic longitude/latitude of the Moon at `jd`.
pub fn moon_ecliptic_position(jd: f64) -> EclipticCoords {
    let args = LunarArguments::at(julian_centuries_since_j2000(jd));
    let lon = args.l_moon + args.series(&LONGITUDE_TERMS);
    let lat = args.series(&LATITUDE_TERMS);
    EclipticCoords {
        lon_deg: normalize_deg(lon.to_degrees()),
        lat_deg: lat.to_degrees(),
    }
}

/// Right ascension/declination of the Moon at `jd`.
pub fn moon_equatorial_position(jd: f64) -> EquatorialCoords {
    ecliptic_to_equatorial(&moon_ecliptic_position(jd), mean_obliquity_deg(jd))
}

/// Azimuth/altitude of the Moon for an observer at (`longitude_deg`, `latitude_deg`).
///
/// Geocentric: no topocentric parallax correction (up to ~1°).
pub fn horizontal_moon_position(jd: f64, longitude_deg: f64, latitude_deg: f64) -> HorizontalCoords {
    equatorial_to_horizontal(
        vernal_equinox_hour_angle_deg(jd, longitude_deg),
        &moon_equatorial_position(jd),
        latitude_deg,
    )
}
