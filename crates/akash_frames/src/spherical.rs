//! Rectangular ↔ spherical coordinate conversion.

use std::f64::consts::PI;

/// Below this radius the direction is undefined and reported as (0, 0).
const TINY: f64 = 1e-30;

/// Spherical coordinates: longitude-like angle, latitude-like angle, radius.
///
/// The same shape serves ecliptic (λ, β), equatorial (α, δ) and local
/// horizontal frames; the caller decides which axes it fed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Angle in the x-y plane from +x toward +y, degrees in [0, 360).
    pub lon_deg: f64,
    /// Elevation above the x-y plane, degrees in [-90, 90].
    pub lat_deg: f64,
    /// Distance from the origin, in the units of the input.
    pub radius: f64,
}

/// Convert rectangular `[x, y, z]` to spherical coordinates.
///
/// A zero (or denormal-small) vector yields `lon = lat = 0` instead of NaN.
pub fn rectangular_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r < TINY {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            radius: r,
        };
    }

    let lon = y.atan2(x);
    let lat = z.atan2(x.hypot(y));

    let lon_deg = if lon < 0.0 { lon + 2.0 * PI } else { lon }.to_degrees();
    SphericalCoords {
        // -0.0 atan2 results and rounding can both land on exactly 360.
        lon_deg: if lon_deg >= 360.0 { 0.0 } else { lon_deg },
        lat_deg: lat.to_degrees(),
        radius: r,
    }
}

/// Convert spherical coordinates back to rectangular `[x, y, z]`.
pub fn spherical_to_rectangular(s: &SphericalCoords) -> [f64; 3] {
    let lon_rad = s.lon_deg.to_radians();
    let lat_rad = s.lat_deg.to_radians();
    let cos_lat = lat_rad.cos();
    [
        s.radius * cos_lat * lon_rad.cos(),
        s.radius * cos_lat * lon_rad.sin(),
        s.radius * lat_rad.sin(),
    ]
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
