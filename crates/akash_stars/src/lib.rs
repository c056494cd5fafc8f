//! Fixed-star catalog and sky projection.
//!
//! [`BRIGHT_STARS`] is a compiled-in, immutable table shared freely
//! between threads. [`StarProjector`] turns catalog entries into local
//! horizontal directions for a given instant and observer.

pub mod catalog;
pub mod field;
pub mod projector;

pub use catalog::{BRIGHT_STARS, StarCatalogEntry, brightest, dms, find_star, hms};
pub use field::random_star_field;
pub use projector::{ProjectedStar, StarProjector, celestial_direction};
