//! Bright star table, J2000.0 mean positions.

/// One catalog star. Angles in degrees, visual magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarCatalogEntry {
    pub name: &'static str,
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
    pub magnitude: f64,
}

/// Right ascension from hours, minutes, seconds to degrees.
pub const fn hms(h: u32, m: u32, s: f64) -> f64 {
    (h as f64 + m as f64 / 60.0 + s / 3600.0) * 15.0
}

/// Signed sexagesimal declination to degrees. `sign` is `1.0` or `-1.0`.
pub const fn dms(sign: f64, d: u32, m: u32, s: f64) -> f64 {
    sign * (d as f64 + m as f64 / 60.0 + s / 3600.0)
}

const fn star(name: &'static str, ra: f64, dec: f64, magnitude: f64) -> StarCatalogEntry {
    StarCatalogEntry {
        name,
        right_ascension_deg: ra,
        declination_deg: dec,
        magnitude,
    }
}

/// Naked-eye stars brighter than magnitude 2, plus Polaris.
#[rustfmt::skip]
pub static BRIGHT_STARS: [StarCatalogEntry; 34] = [
    star("Sirius",          hms( 6, 45,  8.92), dms(-1.0, 16, 42, 58.0), -1.46),
    star("Canopus",         hms( 6, 23, 57.11), dms(-1.0, 52, 41, 44.4), -0.74),
    star("Rigil Kentaurus", hms(14, 39, 36.50), dms(-1.0, 60, 50,  2.0), -0.27),
    star("Arcturus",        hms(14, 15, 39.67), dms( 1.0, 19, 10, 56.7), -0.05),
    star("Vega",            hms(18, 36, 56.34), dms( 1.0, 38, 47,  1.3),  0.03),
    star("Capella",         hms( 5, 16, 41.36), dms( 1.0, 45, 59, 52.8),  0.08),
    star("Rigel",           hms( 5, 14, 32.27), dms(-1.0,  8, 12,  5.9),  0.13),
    star("Procyon",         hms( 7, 39, 18.12), dms( 1.0,  5, 13, 30.0),  0.34),
    star("Achernar",        hms( 1, 37, 42.85), dms(-1.0, 57, 14, 12.3),  0.46),
    star("Betelgeuse",      hms( 5, 55, 10.31), dms( 1.0,  7, 24, 25.4),  0.50),
    star("Hadar",           hms(14,  3, 49.40), dms(-1.0, 60, 22, 22.9),  0.61),
    star("Acrux",           hms(12, 26, 35.90), dms(-1.0, 63,  5, 56.7),  0.76),
    star("Altair",          hms(19, 50, 47.00), dms( 1.0,  8, 52,  6.0),  0.77),
    star("Aldebaran",       hms( 4, 35, 55.24), dms( 1.0, 16, 30, 33.5),  0.86),
    star("Antares",         hms(16, 29, 24.46), dms(-1.0, 26, 25, 55.2),  0.96),
    star("Spica",           hms(13, 25, 11.58), dms(-1.0, 11,  9, 40.8),  0.97),
    star("Pollux",          hms( 7, 45, 18.95), dms( 1.0, 28,  1, 34.3),  1.14),
    star("Fomalhaut",       hms(22, 57, 39.05), dms(-1.0, 29, 37, 20.1),  1.16),
    star("Deneb",           hms(20, 41, 25.90), dms( 1.0, 45, 16, 49.0),  1.25),
    star("Mimosa",          hms(12, 47, 43.27), dms(-1.0, 59, 41, 19.6),  1.25),
    star("Regulus",         hms(10,  8, 22.31), dms( 1.0, 11, 58,  2.0),  1.35),
    star("Adhara",          hms( 6, 58, 37.55), dms(-1.0, 28, 58, 19.5),  1.50),
    star("Castor",          hms( 7, 34, 35.87), dms( 1.0, 31, 53, 17.8),  1.58),
    star("Shaula",          hms(17, 33, 36.52), dms(-1.0, 37,  6, 13.8),  1.62),
    star("Gacrux",          hms(12, 31,  9.96), dms(-1.0, 57,  6, 47.6),  1.63),
    star("Bellatrix",       hms( 5, 25,  7.86), dms( 1.0,  6, 20, 58.9),  1.64),
    star("Elnath",          hms( 5, 26, 17.51), dms( 1.0, 28, 36, 26.8),  1.65),
    star("Miaplacidus",     hms( 9, 13, 12.00), dms(-1.0, 69, 43,  2.0),  1.67),
    star("Alnilam",         hms( 5, 36, 12.81), dms(-1.0,  1, 12,  6.9),  1.69),
    star("Alnair",          hms(22,  8, 13.98), dms(-1.0, 46, 57, 39.5),  1.73),
    star("Alioth",          hms(12, 54,  1.75), dms( 1.0, 55, 57, 35.4),  1.77),
    star("Dubhe",           hms(11,  3, 43.67), dms( 1.0, 61, 45,  3.7),  1.79),
    star("Mirfak",          hms( 3, 24, 19.37), dms( 1.0, 49, 51, 40.2),  1.79),
    star("Polaris",         hms( 2, 31, 49.09), dms( 1.0, 89, 15, 50.8),  1.98),
];

/// The `count` brightest catalog stars, brightest first.
///
/// Returns fewer than `count` when the table is smaller.
pub fn brightest(count: usize) -> Vec<StarCatalogEntry> {
    let mut stars = BRIGHT_STARS.to_vec();
    stars.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
    stars.truncate(count);
    stars
}

/// Look a star up by name, ignoring ASCII case.
pub fn find_star(name: &str) -> Option<&'static StarCatalogEntry> {
    BRIGHT_STARS.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexagesimal() {
        assert_eq!(hms(6, 0, 0.0), 90.0);
        assert_eq!(hms(1, 30, 0.0), 22.5);
        assert_eq!(dms(-1.0, 16, 30, 0.0), -16.5);
        assert_eq!(dms(1.0, 0, 0, 36.0), 0.01);
    }

    #[test]
    fn table_ranges() {
        for s in &BRIGHT_STARS {
            assert!((0.0..360.0).contains(&s.right_ascension_deg), "{}", s.name);
            assert!((-90.0..=90.0).contains(&s.declination_deg), "{}", s.name);
            assert!(s.magnitude < 2.0, "{}", s.name);
        }
    }

    #[test]
    fn brightest_is_sorted_and_bounded() {
        let top = brightest(5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].name, "Sirius");
        assert!(top.windows(2).all(|w| w[0].magnitude <= w[1].magnitude));
        assert_eq!(brightest(1000).len(), BRIGHT_STARS.len());
        assert!(brightest(0).is_empty());
    }

    #[test]
    fn lookup() {
        let vega = find_star("vega").map(|s| s.name);
        assert_eq!(vega, Some("Vega"));
        assert!(find_star("Nibiru").is_none());
    }
}
