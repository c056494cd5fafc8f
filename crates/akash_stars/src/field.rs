//! Synthetic background star fields.

use akash_frames::rectangular_to_spherical;
use rand::Rng;

use crate::catalog::StarCatalogEntry;

/// Brightest magnitude a synthetic star can get.
pub const FIELD_MAGNITUDE_MIN: f64 = 1.5;

/// Magnitude span from the centre of the sampling ball to its surface.
pub const FIELD_MAGNITUDE_RANGE: f64 = 6.0;

/// Generate `count` unnamed stars scattered over the sphere.
///
/// Points are drawn uniformly inside the unit ball; the direction gives
/// the position and the squared radius the magnitude, so faint stars
/// outnumber bright ones.
pub fn random_star_field<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<StarCatalogEntry> {
    let mut stars = Vec::with_capacity(count);
    while stars.len() < count {
        let p = [
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        ];
        let r2: f64 = p.iter().map(|c| c * c).sum();
        if r2 > 1.0 || r2 == 0.0 {
            continue;
        }
        let s = rectangular_to_spherical(&p);
        stars.push(StarCatalogEntry {
            name: "",
            right_ascension_deg: s.lon_deg,
            declination_deg: s.lat_deg,
            magnitude: FIELD_MAGNITUDE_RANGE * r2 + FIELD_MAGNITUDE_MIN,
        });
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn count_and_ranges() {
        let mut rng = StdRng::seed_from_u64(2024);
        let stars = random_star_field(2000, &mut rng);
        assert_eq!(stars.len(), 2000);
        for s in &stars {
            assert!((0.0..360.0).contains(&s.right_ascension_deg));
            assert!((-90.0..=90.0).contains(&s.declination_deg));
            assert!((1.5..=7.5).contains(&s.magnitude));
        }
    }

    #[test]
    fn both_hemispheres_populated() {
        let mut rng = StdRng::seed_from_u64(1);
        let stars = random_star_field(1000, &mut rng);
        let north = stars.iter().filter(|s| s.declination_deg > 0.0).count();
        assert!((350..650).contains(&north), "{north}");
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = random_star_field(50, &mut StdRng::seed_from_u64(9));
        let b = random_star_field(50, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn empty() {
        assert!(random_star_field(0, &mut StdRng::seed_from_u64(0)).is_empty());
    }
}
