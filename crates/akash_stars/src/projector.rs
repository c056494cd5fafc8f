//! Projection of catalog stars onto an observer's horizon.

use akash_frames::{
    EquatorialCoords, HorizontalCoords, ObserverLocation, SphericalCoords,
    equatorial_to_horizontal, spherical_to_rectangular,
};
use akash_time::{SimulatedClock, vernal_equinox_hour_angle_deg};
use log::trace;

use crate::catalog::StarCatalogEntry;

/// A catalog star together with its local direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub entry: StarCatalogEntry,
    pub horizontal: HorizontalCoords,
}

impl ProjectedStar {
    pub fn is_visible(&self) -> bool {
        self.horizontal.is_above_horizon()
    }
}

/// Equatorial unit vector of a star: x toward the vernal equinox, z
/// toward the north celestial pole.
pub fn celestial_direction(entry: &StarCatalogEntry) -> [f64; 3] {
    spherical_to_rectangular(&SphericalCoords {
        lon_deg: entry.right_ascension_deg,
        lat_deg: entry.declination_deg,
        radius: 1.0,
    })
}

/// Projects stars for one instant and one observer.
///
/// The equinox hour angle is computed once at construction; every
/// projection after that is a fixed rotation.
#[derive(Debug, Clone, Copy)]
pub struct StarProjector {
    equinox_hour_angle_deg: f64,
    latitude_deg: f64,
}

impl StarProjector {
    pub fn new(jd: f64, observer: &ObserverLocation) -> Self {
        Self::with_hour_angle(
            vernal_equinox_hour_angle_deg(jd, observer.longitude_deg),
            observer.latitude_deg,
        )
    }

    /// Projector for the clock's current instant.
    pub fn from_clock(clock: &SimulatedClock, observer: &ObserverLocation) -> Self {
        Self::with_hour_angle(
            clock.vernal_equinox_hour_angle_deg(observer.longitude_deg),
            observer.latitude_deg,
        )
    }

    fn with_hour_angle(equinox_hour_angle_deg: f64, latitude_deg: f64) -> Self {
        trace!(
            "star projector: equinox hour angle {equinox_hour_angle_deg:.4} deg, latitude {latitude_deg:.4} deg"
        );
        Self {
            equinox_hour_angle_deg,
            latitude_deg,
        }
    }

    /// Local sidereal angle used for the projection, degrees.
    pub fn equinox_hour_angle_deg(&self) -> f64 {
        self.equinox_hour_angle_deg
    }

    pub fn project(&self, entry: &StarCatalogEntry) -> ProjectedStar {
        let eq = EquatorialCoords {
            ra_deg: entry.right_ascension_deg,
            dec_deg: entry.declination_deg,
        };
        ProjectedStar {
            entry: *entry,
            horizontal: equatorial_to_horizontal(self.equinox_hour_angle_deg, &eq, self.latitude_deg),
        }
    }

    /// Lazily project every entry of `entries`.
    pub fn project_all<'a>(
        &'a self,
        entries: &'a [StarCatalogEntry],
    ) -> impl Iterator<Item = ProjectedStar> + 'a {
        entries.iter().map(move |e| self.project(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BRIGHT_STARS, find_star};
    use akash_time::gregorian_date_time_to_julian_day;
    use approx::assert_abs_diff_eq;

    fn polaris() -> StarCatalogEntry {
        *find_star("Polaris").unwrap()
    }

    #[test]
    fn polaris_altitude_tracks_latitude() {
        let jd = gregorian_date_time_to_julian_day(2024, 10, 1, 21, 0, 0.0);
        for lat in [15.0, 40.0, 70.0] {
            let p = StarProjector::new(jd, &ObserverLocation::new(lat, 10.0)).project(&polaris());
            assert_abs_diff_eq!(p.horizontal.altitude_deg, lat, epsilon = 1.0);
            assert!(p.is_visible());
        }
        let south = StarProjector::new(jd, &ObserverLocation::new(-30.0, 10.0));
        assert!(!south.project(&polaris()).is_visible());
    }

    #[test]
    fn star_at_local_sidereal_angle_transits() {
        let projector = StarProjector::new(2_460_000.5, &ObserverLocation::new(45.0, -73.6));
        let star = StarCatalogEntry {
            name: "test",
            right_ascension_deg: projector.equinox_hour_angle_deg(),
            declination_deg: 10.0,
            magnitude: 1.0,
        };
        let p = projector.project(&star);
        assert_abs_diff_eq!(p.horizontal.azimuth_deg, 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.horizontal.altitude_deg, 55.0, epsilon = 1e-6);
    }

    #[test]
    fn project_all_covers_table() {
        let projector = StarProjector::new(2_451_545.0, &ObserverLocation::new(0.0, 0.0));
        let all: Vec<_> = projector.project_all(&BRIGHT_STARS).collect();
        assert_eq!(all.len(), BRIGHT_STARS.len());
        assert_eq!(all[0].entry.name, BRIGHT_STARS[0].name);
        // From the equator roughly half the sky is up.
        let visible = all.iter().filter(|p| p.is_visible()).count();
        assert!(visible > 5 && visible < BRIGHT_STARS.len() - 5, "{visible}");
    }

    #[test]
    fn clock_and_julian_day_agree() {
        let mut clock = SimulatedClock::new();
        clock.set_julian_day(2_460_321.75);
        let observer = ObserverLocation::new(51.5, -0.1);
        let a = StarProjector::from_clock(&clock, &observer).equinox_hour_angle_deg();
        let b = StarProjector::new(2_460_321.75, &observer).equinox_hour_angle_deg();
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn direction_is_unit_and_points_north_for_polaris() {
        let v = celestial_direction(&polaris());
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-12);
        assert!(v[2] > 0.999);
    }
}
