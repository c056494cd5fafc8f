//! Everything a per-frame sky driver needs, under one path.
//!
//! ```rust,ignore
//! use akash_rs::astronomy::*;
//!
//! let mut clock = SimulatedClock::new();
//! clock.set_gregorian_date_time(2008, 1, 4, 14, 46, 17.0);
//! clock.update(1.0 / 60.0);
//! let sun = horizontal_sun_position(clock.julian_day(), -82.63, 27.97);
//! let light_dir = sun.to_enu();
//! ```

pub use akash_bodies::{
    MoonPhaseName, horizontal_moon_position, horizontal_sun_position, moon_elongation_deg,
    moon_phase,
};
pub use akash_frames::{
    HorizontalCoords, ObserverLocation, SphericalCoords, rectangular_to_spherical,
    spherical_to_rectangular,
};
pub use akash_time::{
    SimulatedClock, gregorian_date_time_to_julian_day, julian_day_to_gregorian_date_time,
    vernal_equinox_hour_angle_deg,
};
