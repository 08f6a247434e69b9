//! Write-once component registry with case-insensitive designator keys.

use std::collections::HashMap;

use crate::component::ComponentRecord;
use crate::zone::PrimaryZone;

/// Result of a registry insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The designator was already present (case-insensitively). The earlier
    /// record is retained and the new one discarded.
    Duplicate,
}

/// Maps designators to placed components. Keys are compared
/// case-insensitively by normalizing to uppercase; the stored record keeps
/// the designator's original spelling.
///
/// Registries are write-once per session: no update or delete.
#[derive(Debug, Default)]
pub struct Registry {
    by_designator: HashMap<String, ComponentRecord>,
    /// Which designators occupy each primary zone. Only consulted by the
    /// grid view, never by lookup.
    occupancy: HashMap<PrimaryZone, Vec<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its designator is already taken. First-seen
    /// wins; the caller is expected to surface `Duplicate` as a warning.
    pub fn insert(&mut self, record: ComponentRecord) -> InsertOutcome {
        let key = record.designator.to_uppercase();
        if self.by_designator.contains_key(&key) {
            return InsertOutcome::Duplicate;
        }
        self.occupancy
            .entry(record.zone.primary)
            .or_default()
            .push(record.designator.clone());
        self.by_designator.insert(key, record);
        InsertOutcome::Inserted
    }

    /// Case-insensitive exact-match lookup. A miss is a normal negative
    /// result, not an error.
    pub fn find(&self, designator: &str) -> Option<&ComponentRecord> {
        self.by_designator.get(&designator.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.by_designator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_designator.is_empty()
    }

    /// Designators occupying a primary zone, in insertion order.
    pub fn occupants(&self, zone: PrimaryZone) -> &[String] {
        self.occupancy.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_occupied(&self, zone: PrimaryZone) -> bool {
        !self.occupants(zone).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSpec;

    fn board() -> BoardSpec {
        BoardSpec::new(100.0, 100.0, 4, 4, 3).unwrap()
    }

    fn rec(board: &BoardSpec, designator: &str, x: f64, y: f64) -> ComponentRecord {
        ComponentRecord::place(board, designator, "Top", x, y)
    }

    #[test]
    fn duplicate_designators_are_case_insensitive() {
        let board = board();
        let mut registry = Registry::new();
        assert_eq!(registry.insert(rec(&board, "C102", 10.0, 10.0)), InsertOutcome::Inserted);
        assert_eq!(registry.insert(rec(&board, "c102", 90.0, 90.0)), InsertOutcome::Duplicate);
        assert_eq!(registry.len(), 1);
        // First-seen record wins.
        assert_eq!(registry.find("C102").unwrap().x_mm, 10.0);
    }

    #[test]
    fn find_is_case_insensitive() {
        let board = board();
        let mut registry = Registry::new();
        registry.insert(rec(&board, "R16", 40.0, 60.0));
        assert!(registry.find("r16").is_some());
        assert!(registry.find("R16").is_some());
    }

    #[test]
    fn find_miss_is_none() {
        let registry = Registry::new();
        assert!(registry.find("U99").is_none());
    }

    #[test]
    fn occupancy_tracks_primary_zone() {
        let board = board();
        let mut registry = Registry::new();
        registry.insert(rec(&board, "C1", 10.0, 10.0));
        registry.insert(rec(&board, "C2", 12.0, 12.0));
        let a1 = PrimaryZone { row: 0, col: 0 };
        assert_eq!(registry.occupants(a1), ["C1", "C2"]);
        assert!(!registry.is_occupied(PrimaryZone { row: 3, col: 3 }));
    }

    #[test]
    fn duplicate_does_not_touch_occupancy() {
        let board = board();
        let mut registry = Registry::new();
        registry.insert(rec(&board, "C1", 10.0, 10.0));
        registry.insert(rec(&board, "c1", 90.0, 90.0));
        assert!(!registry.is_occupied(PrimaryZone { row: 3, col: 3 }));
    }
}
