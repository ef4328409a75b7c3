//! Core types for the repair shop simulation

use std::fmt;

/// Amount of money, in whole currency units.
/// Signed because the shop balance can go negative through fines.
pub type Money = i64;

/// A unique identifier for simulation entities
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimId(pub usize);

/// A wrapper type for part IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(pub SimId);

/// A wrapper type for customer IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub SimId);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 .0)
    }
}

/// Number of customers waiting in line for one run
pub const QUEUE_SIZE: usize = 7;

/// Money every customer arrives with
pub const STARTING_FUNDS: Money = 30_000;

/// Fine the shop pays for a stockout or a wrong replacement
pub const FINE_AMOUNT: Money = 500;

/// Repair cost is the part price times this multiplier
pub const REPAIR_MULTIPLIER: Money = 2;

/// Chance (in percent) that a technician requests the wrong part
pub const MISTAKE_CHANCE: i32 = 50;

/// Upper bound (exclusive) of the diagnosis roll
pub const MAX_CHANCE: i32 = 100;

/// Fewest parts broken on a freshly assembled car
pub const MIN_BROKEN_PARTS: usize = 1;

/// Most parts broken on a freshly assembled car (inclusive)
pub const MAX_BROKEN_PARTS: usize = 3;
