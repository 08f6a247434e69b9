use std::fmt;

#[derive(Debug)]
pub enum BoardError {
    /// Board width or height is zero or negative.
    NonPositiveSize { width_mm: f64, height_mm: f64 },
    /// A grid resolution (rows, cols, or subdivision) is zero.
    ZeroResolution(&'static str),
    /// More than 26 primary rows — the row letter must stay in A..=Z.
    TooManyRows(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { width_mm, height_mm } => {
                write!(f, "board size must be positive, got {width_mm}x{height_mm}mm")
            }
            Self::ZeroResolution(which) => write!(f, "{which} must be at least 1"),
            Self::TooManyRows(rows) => {
                write!(f, "at most 26 primary rows supported (row letters A-Z), got {rows}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
