//! Board geometry for a mapping session.

use serde::Serialize;

use crate::error::BoardError;

/// Physical board dimensions plus the two grid resolutions.
///
/// Immutable for the lifetime of a mapping session; the classifier, registry
/// and grid view all borrow it read-only. All lengths are millimeters.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoardSpec {
    width_mm: f64,
    height_mm: f64,
    rows: usize,
    cols: usize,
    subdiv: usize,
}

impl BoardSpec {
    /// Validate and build a board spec.
    ///
    /// `rows` x `cols` is the primary grid; `subdiv` is the uniform secondary
    /// subdivision applied to both axes inside every primary zone.
    pub fn new(
        width_mm: f64,
        height_mm: f64,
        rows: usize,
        cols: usize,
        subdiv: usize,
    ) -> Result<Self, BoardError> {
        if !(width_mm > 0.0) || !(height_mm > 0.0) {
            return Err(BoardError::NonPositiveSize { width_mm, height_mm });
        }
        if rows == 0 {
            return Err(BoardError::ZeroResolution("rows"));
        }
        if cols == 0 {
            return Err(BoardError::ZeroResolution("cols"));
        }
        if subdiv == 0 {
            return Err(BoardError::ZeroResolution("subdiv"));
        }
        if rows > 26 {
            return Err(BoardError::TooManyRows(rows));
        }
        Ok(Self { width_mm, height_mm, rows, cols, subdiv })
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn subdiv(&self) -> usize {
        self.subdiv
    }

    /// Width of one primary zone.
    pub fn zone_width(&self) -> f64 {
        self.width_mm / self.cols as f64
    }

    /// Height of one primary zone.
    pub fn zone_height(&self) -> f64 {
        self.height_mm / self.rows as f64
    }
}
