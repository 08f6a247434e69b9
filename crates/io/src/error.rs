use std::fmt;

/// File-level failures. Any of these aborts the load of that file; the
/// caller decides what to do next.
#[derive(Debug)]
pub enum CentroidError {
    /// File missing or unreadable.
    Io(String),
    /// EOF reached without finding the quoted `"Designator"` header row.
    HeaderNotFound,
    /// The header row lacks a required column for the detected dialect.
    MissingColumn(String),
    /// Structural CSV failure (bad quoting etc.) past the header.
    Csv(String),
}

impl fmt::Display for CentroidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::HeaderNotFound => {
                write!(f, "no \"Designator\" header row found — not a centroid file?")
            }
            Self::MissingColumn(column) => write!(f, "missing required column '{column}'"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl std::error::Error for CentroidError {}

/// Row-level conditions. These never abort the load: the affected row is
/// skipped (or, for duplicates and clamps, adjusted) and the warning is
/// surfaced to the caller. Row numbers are 1-based data rows, header
/// excluded.
#[derive(Debug, Clone)]
pub enum LoadWarning {
    /// Designator already mapped (case-insensitively); first-seen wins.
    DuplicateDesignator { row: usize, designator: String },
    /// Coordinate failed to parse after unit-suffix stripping; row skipped.
    BadCoordinate { row: usize, column: &'static str, value: String },
    /// Row had no designator value; row skipped.
    MissingDesignator { row: usize },
    /// Negative coordinate clamped to the board origin zone.
    NegativeCoordinate { row: usize, designator: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDesignator { row, designator } => {
                write!(f, "row {row}: duplicate designator '{designator}', keeping first")
            }
            Self::BadCoordinate { row, column, value } => {
                write!(f, "row {row}: cannot parse {column} value '{value}', row skipped")
            }
            Self::MissingDesignator { row } => {
                write!(f, "row {row}: empty designator, row skipped")
            }
            Self::NegativeCoordinate { row, designator } => {
                write!(f, "row {row}: '{designator}' has a negative coordinate, clamped to the board origin")
            }
        }
    }
}
