//! Car assembly with fault injection
//!
//! Every car leaves the assembler with a handful of broken parts so the
//! shop has something to do.

use log::debug;

use super::car::Car;
use super::part::PartCatalog;
use super::random::RandomSource;
use super::types::{MAX_BROKEN_PARTS, MIN_BROKEN_PARTS};

/// Builds cars from fresh catalog draws
#[derive(Debug)]
pub struct CarAssembler {
    catalog: PartCatalog,
    /// Fewest break attempts per car
    min_broken: usize,
    /// Most break attempts per car (inclusive)
    max_broken: usize,
}

impl CarAssembler {
    pub fn new(catalog: PartCatalog) -> Self {
        Self::with_broken_range(catalog, MIN_BROKEN_PARTS, MAX_BROKEN_PARTS)
    }

    /// Create an assembler that breaks between `min` and `max` parts (inclusive)
    pub fn with_broken_range(catalog: PartCatalog, min: usize, max: usize) -> Self {
        Self {
            catalog,
            min_broken: min,
            max_broken: max.max(min),
        }
    }

    /// Assemble a car and break some of its parts
    ///
    /// The break count is drawn from `[min, max]`. Each break picks a random
    /// part, so the same part can be hit twice and the car ends up with
    /// fewer broken parts than breaks.
    pub fn assemble(&mut self, rng: &mut dyn RandomSource) -> Car {
        let mut car = Car::new(self.catalog.create());

        let min = i32::try_from(self.min_broken).unwrap_or(i32::MAX);
        let max = i32::try_from(self.max_broken).unwrap_or(i32::MAX - 1);
        let breaks = rng.uniform(min, max + 1).max(0) as usize;

        for _ in 0..breaks {
            let index = rng.index(car.len());
            car.break_part(index);
        }

        debug!(
            "Assembled car with {} parts, {} breaks, {} broken",
            car.len(),
            breaks,
            car.broken_count()
        );

        car
    }
}
