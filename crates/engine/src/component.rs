use serde::Serialize;

use crate::board::BoardSpec;
use crate::zone::{classify, ZoneLabel};

/// One placed component: a designator, a side/layer label, and a center
/// point in canonical millimeters.
///
/// Created once per parsed input row and never mutated afterwards; the zone
/// is derived from the board spec at construction, never set by a caller.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentRecord {
    pub designator: String,
    pub layer: String,
    pub x_mm: f64,
    pub y_mm: f64,
    pub zone: ZoneLabel,
}

impl ComponentRecord {
    /// Build a record with its zone classified against `board`.
    pub fn place(
        board: &BoardSpec,
        designator: impl Into<String>,
        layer: impl Into<String>,
        x_mm: f64,
        y_mm: f64,
    ) -> Self {
        Self {
            designator: designator.into(),
            layer: layer.into(),
            x_mm,
            y_mm,
            zone: classify(board, x_mm, y_mm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_derives_zone() {
        let board = BoardSpec::new(100.0, 100.0, 4, 4, 3).unwrap();
        let rec = ComponentRecord::place(&board, "C102", "Top", 12.5, 12.5);
        assert_eq!(rec.zone.to_string(), "A1-22");
        assert_eq!(rec.designator, "C102");
    }
}
