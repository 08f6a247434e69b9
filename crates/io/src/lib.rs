//! `pinmap-io` — centroid (pick-and-place) file reading.
//!
//! Detects a file's dialect (header row offset, unit system), normalizes
//! coordinates to millimeters, and feeds classified records into a
//! `pinmap-engine` registry.

pub mod centroid;
pub mod dialect;
pub mod error;

pub use centroid::{load, normalize_coordinate, LoadReport};
pub use dialect::{detect, FileDialect, UnitSystem, MIL_TO_MM};
pub use error::{CentroidError, LoadWarning};
