//! Error types for calendar parsing and validation.
//!
//! The conversion functions themselves are total; these errors only come
//! from the strict helpers used by validating callers.

use thiserror::Error;

/// Errors from calendar string parsing or field validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The input is not a `YYYY-MM-DDThh:mm:ssZ` timestamp.
    #[error("invalid date/time string: {0:?}")]
    Parse(String),
    /// A calendar field is outside its valid range.
    #[error("calendar field out of range: {0}")]
    FieldOutOfRange(&'static str),
}
