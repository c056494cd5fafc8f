//! TOML configuration for a clock-driven sky session.
//!
//! ```toml
//! time_scale = 60.0
//!
//! [observer]
//! latitude_deg = 27.97
//! longitude_deg = -82.63
//!
//! [start]
//! utc = "2008-01-04T14:46:17Z"   # or: julian_day = 2454470.115
//! ```

use std::fs;
use std::path::Path;

use akash_frames::ObserverLocation;
use akash_time::{GregorianDateTime, J2000_JD, SimulatedClock};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::checked::check_observer;
use crate::error::AkashError;

/// Starting instant of the simulated clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StartEpoch {
    JulianDay { julian_day: f64 },
    Utc { utc: String },
}

impl Default for StartEpoch {
    fn default() -> Self {
        Self::JulianDay {
            julian_day: J2000_JD,
        }
    }
}

impl StartEpoch {
    /// Resolve to a Julian Day, parsing the UTC form if needed.
    pub fn julian_day(&self) -> Result<f64, AkashError> {
        match self {
            Self::JulianDay { julian_day } if julian_day.is_finite() => Ok(*julian_day),
            Self::JulianDay { .. } => Err(AkashError::InvalidConfig(
                "start.julian_day must be finite",
            )),
            Self::Utc { utc } => Ok(utc.parse::<GregorianDateTime>()?.to_julian_day()),
        }
    }
}

fn default_time_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AkashConfig {
    pub observer: ObserverLocation,
    #[serde(default)]
    pub start: StartEpoch,
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
}

impl AkashConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AkashError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::parse(&text)?;
        debug!(
            "loaded config from {}: observer ({:.4}, {:.4}), time scale {}",
            path.display(),
            config.observer.latitude_deg,
            config.observer.longitude_deg,
            config.time_scale
        );
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(text: &str) -> Result<Self, AkashError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AkashError> {
        check_observer(&self.observer)?;
        if !self.time_scale.is_finite() {
            return Err(AkashError::InvalidConfig("time_scale must be finite"));
        }
        self.start.julian_day()?;
        Ok(())
    }

    /// A clock rebased at the configured start and running at the configured rate.
    pub fn build_clock(&self) -> Result<SimulatedClock, AkashError> {
        self.validate()?;
        let mut clock = SimulatedClock::new();
        clock.set_julian_day(self.start.julian_day()?);
        clock.set_time_scale(self.time_scale);
        Ok(clock)
    }
}
