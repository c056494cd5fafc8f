//! Lunar phase from the Sun–Moon elongation.

use std::fmt;

use crate::moon::moon_ecliptic_position;
use crate::sun::sun_ecliptic_position;

/// Mean synodic month, days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Moon minus Sun ecliptic longitude at `jd`, degrees in (-180, 180].
///
/// Positive while the Moon is east of the Sun (waxing).
pub fn moon_elongation_deg(jd: f64) -> f64 {
    let diff = (moon_ecliptic_position(jd).lon_deg - sun_ecliptic_position(jd).lon_deg)
        .rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}

/// Illuminated fraction of the lunar disc: 0 = new, 0.5 = quarter, 1 = full.
pub fn moon_phase(jd: f64) -> f64 {
    illuminated_fraction(moon_elongation_deg(jd))
}

fn illuminated_fraction(elongation_deg: f64) -> f64 {
    (1.0 - elongation_deg.to_radians().cos()) / 2.0
}

/// The eight traditional named phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in order through one lunation, starting at new moon.
pub const ALL_PHASES: [MoonPhaseName; 8] = [
    MoonPhaseName::New,
    MoonPhaseName::WaxingCrescent,
    MoonPhaseName::FirstQuarter,
    MoonPhaseName::WaxingGibbous,
    MoonPhaseName::Full,
    MoonPhaseName::WaningGibbous,
    MoonPhaseName::LastQuarter,
    MoonPhaseName::WaningCrescent,
];

impl MoonPhaseName {
    /// Classify a signed elongation into 45° sectors centred on the
    /// principal phases.
    pub fn from_elongation_deg(elongation_deg: f64) -> Self {
        let sector = ((elongation_deg.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize % 8;
        ALL_PHASES[sector]
    }

    pub fn at(jd: f64) -> Self {
        Self::from_elongation_deg(moon_elongation_deg(jd))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// True between new and full. New and full themselves are neither.
    pub const fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }
}

impl fmt::Display for MoonPhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_endpoints() {
        assert_eq!(illuminated_fraction(0.0), 0.0);
        assert!((illuminated_fraction(90.0) - 0.5).abs() < 1e-15);
        assert!((illuminated_fraction(-90.0) - 0.5).abs() < 1e-15);
        assert_eq!(illuminated_fraction(180.0), 1.0);
    }

    #[test]
    fn sectors() {
        assert_eq!(MoonPhaseName::from_elongation_deg(0.0), MoonPhaseName::New);
        assert_eq!(MoonPhaseName::from_elongation_deg(-22.0), MoonPhaseName::New);
        assert_eq!(MoonPhaseName::from_elongation_deg(22.6), MoonPhaseName::WaxingCrescent);
        assert_eq!(MoonPhaseName::from_elongation_deg(90.0), MoonPhaseName::FirstQuarter);
        assert_eq!(MoonPhaseName::from_elongation_deg(135.0), MoonPhaseName::WaxingGibbous);
        assert_eq!(MoonPhaseName::from_elongation_deg(180.0), MoonPhaseName::Full);
        assert_eq!(MoonPhaseName::from_elongation_deg(-170.0), MoonPhaseName::Full);
        assert_eq!(MoonPhaseName::from_elongation_deg(-135.0), MoonPhaseName::WaningGibbous);
        assert_eq!(MoonPhaseName::from_elongation_deg(-90.0), MoonPhaseName::LastQuarter);
        assert_eq!(MoonPhaseName::from_elongation_deg(-45.0), MoonPhaseName::WaningCrescent);
    }

    #[test]
    fn waxing_flags() {
        let waxing: Vec<_> = ALL_PHASES.iter().filter(|p| p.is_waxing()).collect();
        assert_eq!(waxing.len(), 3);
        assert!(!MoonPhaseName::New.is_waxing());
        assert!(!MoonPhaseName::Full.is_waxing());
        assert!(!MoonPhaseName::LastQuarter.is_waxing());
    }

    #[test]
    fn elongation_range() {
        for i in 0..2000 {
            let e = moon_elongation_deg(2_451_545.0 + i as f64 * 0.731);
            assert!(e > -180.0 && e <= 180.0, "{e}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(MoonPhaseName::FirstQuarter.to_string(), "First Quarter");
    }
}
