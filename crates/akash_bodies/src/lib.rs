//! Low-precision Sun and Moon positions and lunar phase.
//!
//! Each body goes through the same pipeline: ecliptic series → equatorial
//! (mean obliquity) → local horizon (vernal equinox hour angle). All
//! functions are pure and allocation-free; out-of-range observer
//! coordinates produce finite but meaningless directions.

pub mod moon;
pub mod phase;
pub mod sun;

pub use moon::{horizontal_moon_position, moon_ecliptic_position, moon_equatorial_position};
pub use phase::{
    ALL_PHASES, MoonPhaseName, SYNODIC_MONTH_DAYS, moon_elongation_deg, moon_phase,
};
pub use sun::{horizontal_sun_position, sun_ecliptic_position, sun_equatorial_position};
