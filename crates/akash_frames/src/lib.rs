//! Coordinate transforms between the rectangular, ecliptic, equatorial and
//! local horizontal frames.
//!
//! All angles are degrees at the API boundary.

pub mod ecliptic;
pub mod horizontal;
pub mod spherical;

pub use ecliptic::{
    EclipticCoords, EquatorialCoords, OBLIQUITY_J2000_DEG, ecliptic_to_equatorial,
    mean_obliquity_deg,
};
pub use horizontal::{HorizontalCoords, ObserverLocation, equatorial_to_horizontal};
pub use spherical::{
    SphericalCoords, normalize_deg, rectangular_to_spherical, spherical_to_rectangular,
};
