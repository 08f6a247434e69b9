//! Two-tier zone labels and the coordinate classifier.
//!
//! A zone label combines a coarse primary zone (`A1`) with a fine secondary
//! row/column pair inside it (`A1-23`). Primary rows are lettered bottom to
//! top: row 0 = `A` = lowest Y, matching conventional board-panel layout.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::board::BoardSpec;

/// One cell of the primary grid. Row and column are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimaryZone {
    pub row: usize,
    pub col: usize,
}

impl PrimaryZone {
    /// The display letter for this zone's row (`A` = row 0).
    pub fn row_letter(&self) -> char {
        (b'A' + self.row as u8) as char
    }
}

impl fmt::Display for PrimaryZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col + 1)
    }
}

impl Serialize for PrimaryZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Full two-tier zone label, e.g. `A1-23` = primary zone A1, secondary
/// row 2 / column 3 of its subdivision. Secondary indices are 1-based.
///
/// Fully determined by `(BoardSpec, x, y)` — see [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneLabel {
    pub primary: PrimaryZone,
    pub sec_row: usize,
    pub sec_col: usize,
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}{}", self.primary, self.sec_row, self.sec_col)
    }
}

impl Serialize for ZoneLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Map a canonical (x, y) position in millimeters to its zone label.
///
/// Pure function of the board spec and coordinates. Positions on or past the
/// outer board edge clamp to the last zone; negative positions clamp to the
/// first (the loader warns about those separately).
pub fn classify(board: &BoardSpec, x_mm: f64, y_mm: f64) -> ZoneLabel {
    let zone_w = board.zone_width();
    let zone_h = board.zone_height();

    let col = clamp_index((x_mm / zone_w).floor(), board.cols());
    let row = clamp_index((y_mm / zone_h).floor(), board.rows());

    // Position relative to the owning primary zone's origin.
    let x_rel = x_mm - col as f64 * zone_w;
    let y_rel = y_mm - row as f64 * zone_h;

    let sub_w = zone_w / board.subdiv() as f64;
    let sub_h = zone_h / board.subdiv() as f64;

    let sec_col = clamp_secondary((x_rel / sub_w).floor(), board.subdiv());
    let sec_row = clamp_secondary((y_rel / sub_h).floor(), board.subdiv());

    ZoneLabel { primary: PrimaryZone { row, col }, sec_row, sec_col }
}

/// Clamp a floored 0-based index into `[0, count)`.
fn clamp_index(raw: f64, count: usize) -> usize {
    if raw < 0.0 {
        0
    } else {
        (raw as usize).min(count - 1)
    }
}

/// Clamp a floored 0-based secondary index into the 1-based `[1, subdiv]`.
fn clamp_secondary(raw: f64, subdiv: usize) -> usize {
    let label = (raw as i64).saturating_add(1);
    label.clamp(1, subdiv as i64) as usize
}
