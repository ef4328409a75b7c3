//! Car owned by a customer
//!
//! A car is nothing more than the parts it is made of. Parts are only ever
//! swapped one for one, so the part count of a car never changes.

use super::part::Part;

/// A car in the repair shop simulation
#[derive(Debug, Clone, Default)]
pub struct Car {
    parts: Vec<Part>,
}

impl Car {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Snapshots of every part that is not working, in car order
    pub fn broken_parts(&self) -> Vec<Part> {
        self.parts
            .iter()
            .filter(|part| !part.is_working())
            .cloned()
            .collect()
    }

    pub fn broken_count(&self) -> usize {
        self.parts.iter().filter(|part| !part.is_working()).count()
    }

    /// Break the part at `index`. Returns false if there is no such part.
    pub fn break_part(&mut self, index: usize) -> bool {
        match self.parts.get_mut(index) {
            Some(part) => {
                part.break_down();
                true
            }
            None => false,
        }
    }

    /// Swap `broken` for `incoming`
    ///
    /// Succeeds only if both parts carry the same name and `broken` is
    /// still fitted to this car. On success the removed part is returned
    /// and `incoming` is appended. On failure the car is untouched and
    /// `incoming` is handed back.
    pub fn try_replace(&mut self, incoming: Part, broken: &Part) -> Result<Part, Part> {
        if incoming.name() != broken.name() {
            return Err(incoming);
        }

        let Some(index) = self.parts.iter().position(|part| part.id() == broken.id()) else {
            return Err(incoming);
        };

        let removed = self.parts.remove(index);
        self.parts.push(incoming);
        Ok(removed)
    }
}
