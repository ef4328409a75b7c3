//! Parts and the catalog they are produced from

use std::fmt;

use super::types::{Money, PartId, SimId};

/// Names and prices of every part a car is built from
pub const CATALOG: [(&str, Money); 8] = [
    ("Brake pad", 1500),
    ("Steering rack", 3500),
    ("Oil change", 700),
    ("Fuel pump", 2600),
    ("Timing belt", 600),
    ("Oil filter", 500),
    ("Transmission", 6000),
    ("Crankshaft", 3400),
];

/// A single physical part
///
/// Parts are identified by `id`; two parts with the same name are still
/// different parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    id: PartId,
    name: String,
    price: Money,
    is_working: bool,
}

impl Part {
    pub fn new(id: PartId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.max(0),
            is_working: true,
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn is_working(&self) -> bool {
        self.is_working
    }

    /// Mark the part as broken. Breaking an already broken part does nothing.
    pub fn break_down(&mut self) {
        self.is_working = false;
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} {:>6} {}",
            self.name,
            self.price,
            if self.is_working { "working" } else { "BROKEN" }
        )
    }
}

/// Produces fresh part sets from [`CATALOG`]
///
/// Every call to [`PartCatalog::create`] hands out new ids, so parts from
/// different draws never share an identity.
#[derive(Debug, Default)]
pub struct PartCatalog {
    next_id: usize,
}

impl PartCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_part_id(&mut self) -> PartId {
        let id = PartId(SimId(self.next_id));
        self.next_id += 1;
        id
    }

    /// Build one working part for every catalog entry, in catalog order
    pub fn create(&mut self) -> Vec<Part> {
        CATALOG
            .iter()
            .map(|(name, price)| {
                let id = self.next_part_id();
                Part::new(id, *name, *price)
            })
            .collect()
    }

    /// Build a single part outside the catalog order
    pub fn make_part(&mut self, name: impl Into<String>, price: Money) -> Part {
        let id = self.next_part_id();
        Part::new(id, name, price)
    }

    /// Total number of parts handed out so far
    pub fn parts_created(&self) -> usize {
        self.next_id
    }
}
