//! Set of zones already declared in the current run.

use std::collections::HashSet;

/// Membership set of zone names.
///
/// Grows for the lifetime of one conversion and supports no removal. Only
/// membership is meaningful; iteration order is not exposed.
#[derive(Debug, Default, Clone)]
pub struct ZoneRegistry {
    zones: HashSet<String>,
}

impl ZoneRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zone. Returns `true` if it was not present before.
    pub fn add(&mut self, zone: &str) -> bool {
        self.zones.insert(zone.to_string())
    }

    /// Whether `zone` has been added.
    pub fn contains(&self, zone: &str) -> bool {
        self.zones.contains(zone)
    }

    /// Number of distinct zones added.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no zone has been added yet.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
