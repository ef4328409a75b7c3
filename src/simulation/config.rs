//! Tunable constants of a simulation run

use anyhow::{ensure, Result};

use super::types::{
    Money, FINE_AMOUNT, MAX_BROKEN_PARTS, MAX_CHANCE, MIN_BROKEN_PARTS, MISTAKE_CHANCE,
    QUEUE_SIZE, REPAIR_MULTIPLIER, STARTING_FUNDS,
};

/// Configuration for one run of the shop
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Number of customers enqueued at the start of the run
    pub customers: usize,
    /// Money each customer arrives with
    pub starting_funds: Money,
    /// Fine for a stockout or a wrong replacement
    pub fine: Money,
    /// Repair cost multiplier applied to part prices
    pub repair_multiplier: Money,
    /// Misdiagnosis chance in percent
    pub mistake_chance: i32,
    /// Fewest parts broken per car
    pub min_broken: usize,
    /// Most parts broken per car (inclusive)
    pub max_broken: usize,
    /// Number of full catalog sets the warehouse is stocked with
    pub warehouse_sets: usize,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            customers: QUEUE_SIZE,
            starting_funds: STARTING_FUNDS,
            fine: FINE_AMOUNT,
            repair_multiplier: REPAIR_MULTIPLIER,
            mistake_chance: MISTAKE_CHANCE,
            min_broken: MIN_BROKEN_PARTS,
            max_broken: MAX_BROKEN_PARTS,
            warehouse_sets: 1,
            seed: None,
        }
    }
}

impl ShopConfig {
    /// Check that the configuration describes a runnable shop
    pub fn validate(&self) -> Result<()> {
        ensure!(self.customers > 0, "at least one customer is required");
        ensure!(
            self.starting_funds >= 0,
            "starting funds must not be negative, got {}",
            self.starting_funds
        );
        ensure!(self.fine >= 0, "fine must not be negative, got {}", self.fine);
        ensure!(
            self.repair_multiplier >= 0,
            "repair multiplier must not be negative, got {}",
            self.repair_multiplier
        );
        ensure!(
            (0..=MAX_CHANCE).contains(&self.mistake_chance),
            "mistake chance must be within 0..={}, got {}",
            MAX_CHANCE,
            self.mistake_chance
        );
        ensure!(
            self.min_broken >= 1,
            "every car must have at least one broken part"
        );
        ensure!(
            self.min_broken <= self.max_broken,
            "broken part range {}..={} is empty",
            self.min_broken,
            self.max_broken
        );
        ensure!(
            self.warehouse_sets > 0,
            "the warehouse needs at least one catalog set"
        );
        Ok(())
    }
}
