//! Facade over the akash crates.
//!
//! - [`astronomy`]: the flat set of total functions a renderer calls
//!   each frame
//! - [`checked`]: the same calls with input validation
//! - [`AkashConfig`]: TOML session config that builds a [`SimulatedClock`]
//!
//! The underlying crates are re-exported for callers that need the full
//! surface.

pub mod astronomy;
pub mod checked;
pub mod config;
pub mod error;

pub use config::{AkashConfig, StartEpoch};
pub use error::AkashError;

pub use akash_bodies as bodies;
pub use akash_frames as frames;
pub use akash_stars as stars;
pub use akash_time as time;

pub use akash_frames::{HorizontalCoords, ObserverLocation};
pub use akash_time::{ClockState, GregorianDateTime, SimulatedClock};
