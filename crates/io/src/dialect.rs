//! Centroid file dialect detection.
//!
//! Pick-and-place exports prepend a free-form report preamble before the
//! real CSV header. The detector scans from the top for the quoted
//! `"Designator"` header row, and for a `Units used:` marker that switches
//! the expected coordinate columns from millimeters to mils.

use std::fmt;
use std::io::{self, BufRead};

/// 1 mil = 0.0254 mm.
pub const MIL_TO_MM: f64 = 0.0254;

/// The linear unit a centroid file's coordinates are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Millimeters,
    Mils,
}

impl UnitSystem {
    /// Factor that scales this unit into canonical millimeters.
    pub fn conversion_factor(&self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Mils => MIL_TO_MM,
        }
    }

    /// Name of the X coordinate column in this dialect.
    pub fn x_column(&self) -> &'static str {
        match self {
            Self::Millimeters => "Center-X(mm)",
            Self::Mils => "Center-X(mil)",
        }
    }

    /// Name of the Y coordinate column in this dialect.
    pub fn y_column(&self) -> &'static str {
        match self {
            Self::Millimeters => "Center-Y(mm)",
            Self::Mils => "Center-Y(mil)",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeters => write!(f, "mm"),
            Self::Mils => write!(f, "mil"),
        }
    }
}

/// Header position and unit system inferred from one file.
#[derive(Debug, Clone, Copy)]
pub struct FileDialect {
    /// 0-based line index of the `"Designator"` header row, or `None` when
    /// EOF was reached without finding it.
    pub header_row: Option<usize>,
    pub units: UnitSystem,
}

/// Scan lines from the start of a centroid file.
///
/// Stops at the first line whose trimmed start is the quoted `"Designator"`
/// token. Any earlier line containing `Units used:` is checked
/// case-insensitively for a `mil` token. Read-only: detection must run
/// before record parsing because the header offset decides how many lines
/// to skip and the unit system decides which columns to bind.
pub fn detect<R: BufRead>(reader: R) -> io::Result<FileDialect> {
    let mut units = UnitSystem::Millimeters;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim_start().starts_with("\"Designator\"") {
            return Ok(FileDialect { header_row: Some(index), units });
        }
        if line.contains("Units used:") && line.to_lowercase().contains("mil") {
            units = UnitSystem::Mils;
        }
    }

    Ok(FileDialect { header_row: None, units })
}
