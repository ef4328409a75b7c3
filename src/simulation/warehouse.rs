//! Spare parts warehouse shared by every visit in a run
//!
//! The warehouse is only ever drained. Spares are handed out oldest first
//! and nothing is put back.

use std::collections::{HashMap, VecDeque};

use super::part::Part;

/// Spare parts grouped by name
#[derive(Debug, Default)]
pub struct Warehouse {
    spares: HashMap<String, VecDeque<Part>>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock the warehouse with `parts`, keeping their order within each name
    pub fn from_parts(parts: impl IntoIterator<Item = Part>) -> Self {
        let mut spares: HashMap<String, VecDeque<Part>> = HashMap::new();
        for part in parts {
            spares
                .entry(part.name().to_string())
                .or_default()
                .push_back(part);
        }
        Self { spares }
    }

    /// Take the oldest spare called `name`
    /// Returns None if the name is unknown or its bucket is empty
    pub fn try_withdraw(&mut self, name: &str) -> Option<Part> {
        self.spares.get_mut(name)?.pop_front()
    }

    /// Number of spares left for `name`
    pub fn stock_of(&self, name: &str) -> usize {
        self.spares.get(name).map_or(0, VecDeque::len)
    }

    pub fn total_stock(&self) -> usize {
        self.spares.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_stock() == 0
    }

    /// Names with at least one spare left, sorted for stable output
    pub fn names_in_stock(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .spares
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
