//! Structured grid view of the primary grid.
//!
//! The engine describes what each cell contains; turning that into bordered
//! (or colored) text is a presentation concern owned by the caller.

use serde::Serialize;

use crate::board::BoardSpec;
use crate::registry::Registry;
use crate::zone::PrimaryZone;

#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub zone: PrimaryZone,
    /// At least one component sits in this primary zone.
    pub occupied: bool,
    /// This cell is the lookup target.
    pub highlighted: bool,
}

/// Snapshot of the primary grid, row-major with the top board row
/// (highest letter) first.
#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<GridCell>,
}

impl GridView {
    /// Cell by display position: `display_row` 0 is the top row.
    pub fn cell(&self, display_row: usize, col: usize) -> &GridCell {
        &self.cells[display_row * self.cols + col]
    }
}

/// Build a grid view of the registry's occupancy, optionally highlighting
/// one target zone. Reads registry state, never mutates it.
pub fn grid_view(board: &BoardSpec, registry: &Registry, target: Option<PrimaryZone>) -> GridView {
    let mut cells = Vec::with_capacity(board.rows() * board.cols());
    for row in (0..board.rows()).rev() {
        for col in 0..board.cols() {
            let zone = PrimaryZone { row, col };
            cells.push(GridCell {
                zone,
                occupied: registry.is_occupied(zone),
                highlighted: target == Some(zone),
            });
        }
    }
    GridView { rows: board.rows(), cols: board.cols(), cells }
}
