//! `pinmap-engine` — PCB placement zone mapping engine.
//!
//! Pure engine crate: receives normalized placements, returns zone labels,
//! a queryable component registry, and structured grid views.
//! No CLI or IO dependencies.

pub mod board;
pub mod component;
pub mod error;
pub mod grid;
pub mod registry;
pub mod zone;

pub use board::BoardSpec;
pub use component::ComponentRecord;
pub use error::BoardError;
pub use grid::{grid_view, GridCell, GridView};
pub use registry::{InsertOutcome, Registry};
pub use zone::{classify, PrimaryZone, ZoneLabel};
