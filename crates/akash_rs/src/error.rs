//! Error type for the validating layer and configuration loading.

use akash_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AkashError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("invalid observer location: {0}")]
    InvalidLocation(&'static str),
    #[error("invalid Julian Day: {0}")]
    InvalidJulianDay(f64),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
