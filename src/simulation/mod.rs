//! Standalone repair shop simulation module
//!
//! This module contains the shop, its warehouse and the customers it
//! serves. Everything runs on one thread, one visit at a time.

mod assembler;
mod car;
mod config;
mod customer;
mod ledger;
mod part;
mod random;
mod shop;
mod types;
mod warehouse;
mod world;

// Re-export public types for external use
pub use assembler::CarAssembler;
pub use car::Car;
pub use config::ShopConfig;
pub use customer::Customer;
pub use ledger::ShopLedger;
pub use part::{Part, PartCatalog, CATALOG};
pub use random::{FixedSequence, RandomSource, SimRandom};
pub use shop::{BillingOutcome, RepairEvent, RepairShop, VisitReport};
pub use types::{
    CustomerId, Money, PartId, SimId, FINE_AMOUNT, MAX_BROKEN_PARTS, MAX_CHANCE,
    MIN_BROKEN_PARTS, MISTAKE_CHANCE, QUEUE_SIZE, REPAIR_MULTIPLIER, STARTING_FUNDS,
};
pub use warehouse::Warehouse;
pub use world::SimWorld;
