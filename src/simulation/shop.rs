//! The repair shop and its visit transaction
//!
//! A visit runs through `Inspecting -> Pricing -> Repairing -> Billing`.
//! Repairing stops early on a stockout but only skips a part when the
//! wrong spare was fitted; the two cases are kept apart in
//! [`RepairEvent`].

use log::{debug, info, warn};

use super::car::Car;
use super::config::ShopConfig;
use super::customer::Customer;
use super::ledger::ShopLedger;
use super::part::Part;
use super::random::RandomSource;
use super::types::{
    CustomerId, Money, FINE_AMOUNT, MAX_CHANCE, MISTAKE_CHANCE, REPAIR_MULTIPLIER,
};
use super::warehouse::Warehouse;

/// What happened to one broken part during a visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairEvent {
    /// The broken part was swapped for a working spare
    Replaced {
        part: String,
        /// Diagnosis picked a random part that happened to be the right one
        misdiagnosed: bool,
    },
    /// A spare was withdrawn but did not fit the broken part; the shop was fined
    Misrepaired {
        target: String,
        withdrawn: String,
        fine: Money,
    },
    /// No spare with the requested name was in stock; the shop was fined and
    /// the remaining repairs for this car were abandoned
    OutOfStock {
        target: String,
        requested: String,
        fine: Money,
    },
}

impl RepairEvent {
    /// Fine charged for this event, 0 for a successful replacement
    pub fn fine(&self) -> Money {
        match self {
            RepairEvent::Replaced { .. } => 0,
            RepairEvent::Misrepaired { fine, .. } | RepairEvent::OutOfStock { fine, .. } => *fine,
        }
    }

    /// Whether this event stops the repair loop for the current car
    pub fn ends_repairs(&self) -> bool {
        matches!(self, RepairEvent::OutOfStock { .. })
    }
}

/// How the bill for a visit was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingOutcome {
    /// The customer paid the full repair cost
    Paid(Money),
    /// The customer could not cover the repair cost; no money changed hands
    InsufficientFunds { required: Money, available: Money },
}

/// Everything observable about one concluded visit
#[derive(Debug, Clone)]
pub struct VisitReport {
    pub customer: CustomerId,
    /// Every part of the car as it arrived, working or not
    pub parts_before: Vec<Part>,
    /// Parts found broken during inspection, before any repair
    pub broken_parts: Vec<Part>,
    /// Price of repairing every broken part, fixed before repairs start
    pub repair_cost: Money,
    pub events: Vec<RepairEvent>,
    pub billing: BillingOutcome,
    /// Shop balance after this visit
    pub shop_balance: Money,
}

impl VisitReport {
    /// Total fines charged during this visit
    pub fn fines(&self) -> Money {
        self.events.iter().map(RepairEvent::fine).sum()
    }

    pub fn stocked_out(&self) -> bool {
        self.events.iter().any(RepairEvent::ends_repairs)
    }

    pub fn misrepairs(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, RepairEvent::Misrepaired { .. }))
            .count()
    }

    pub fn replacements(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, RepairEvent::Replaced { .. }))
            .count()
    }

    /// Every broken part was replaced and nothing was fined
    pub fn fully_repaired(&self) -> bool {
        self.replacements() == self.broken_parts.len() && self.fines() == 0
    }

    pub fn was_paid(&self) -> bool {
        matches!(self.billing, BillingOutcome::Paid(_))
    }
}

/// Part name a technician asks the warehouse for
struct Diagnosis {
    requested: String,
    mistaken: bool,
}

/// A single-window repair shop
#[derive(Debug)]
pub struct RepairShop {
    warehouse: Warehouse,
    ledger: ShopLedger,
    fine: Money,
    repair_multiplier: Money,
    /// Misdiagnosis chance in percent
    mistake_chance: i32,
}

impl RepairShop {
    pub fn new(warehouse: Warehouse) -> Self {
        Self {
            warehouse,
            ledger: ShopLedger::new(),
            fine: FINE_AMOUNT,
            repair_multiplier: REPAIR_MULTIPLIER,
            mistake_chance: MISTAKE_CHANCE,
        }
    }

    pub fn with_config(warehouse: Warehouse, config: &ShopConfig) -> Self {
        Self {
            fine: config.fine,
            repair_multiplier: config.repair_multiplier,
            ..Self::new(warehouse)
        }
        .with_mistake_chance(config.mistake_chance)
    }

    /// Override the misdiagnosis chance (percent, clamped to 0..=100)
    pub fn with_mistake_chance(mut self, chance: i32) -> Self {
        self.mistake_chance = chance.clamp(0, MAX_CHANCE);
        self
    }

    pub fn balance(&self) -> Money {
        self.ledger.balance
    }

    pub fn ledger(&self) -> &ShopLedger {
        &self.ledger
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn fine(&self) -> Money {
        self.fine
    }

    pub fn mistake_chance(&self) -> i32 {
        self.mistake_chance
    }

    /// Serve one customer from inspection to billing
    pub fn serve(&mut self, customer: &mut Customer, rng: &mut dyn RandomSource) -> VisitReport {
        let parts_before = customer.car().parts().to_vec();
        let broken_parts = customer.car().broken_parts();
        let repair_cost = self.price(&broken_parts);
        debug!(
            "Customer {}: {} broken parts, repair cost {}",
            customer.id,
            broken_parts.len(),
            repair_cost
        );

        let events = self.repair(customer.car_mut(), &broken_parts, rng);
        let billing = self.bill(customer, repair_cost);
        self.ledger.complete_visit(matches!(billing, BillingOutcome::Paid(_)));

        info!(
            "Served customer {}: {} events, shop balance {}",
            customer.id,
            events.len(),
            self.ledger.balance
        );

        VisitReport {
            customer: customer.id,
            parts_before,
            broken_parts,
            repair_cost,
            events,
            billing,
            shop_balance: self.ledger.balance,
        }
    }

    /// Cost of repairing one part
    pub fn evaluate_repair(&self, part: &Part) -> Money {
        part.price() * self.repair_multiplier
    }

    /// Cost of repairing every part in `broken_parts`
    pub fn price(&self, broken_parts: &[Part]) -> Money {
        broken_parts
            .iter()
            .map(|part| self.evaluate_repair(part))
            .sum()
    }

    fn repair(
        &mut self,
        car: &mut Car,
        broken_parts: &[Part],
        rng: &mut dyn RandomSource,
    ) -> Vec<RepairEvent> {
        let mut events = Vec::with_capacity(broken_parts.len());
        for broken in broken_parts {
            let event = self.repair_part(car, broken, rng);
            let stop = event.ends_repairs();
            events.push(event);
            if stop {
                break;
            }
        }
        events
    }

    fn repair_part(
        &mut self,
        car: &mut Car,
        broken: &Part,
        rng: &mut dyn RandomSource,
    ) -> RepairEvent {
        let diagnosis = self.diagnose(car, broken, rng);

        let Some(spare) = self.warehouse.try_withdraw(&diagnosis.requested) else {
            self.ledger.record_fine(self.fine);
            warn!(
                "No {} in stock for {}, shop fined {}",
                diagnosis.requested,
                broken.name(),
                self.fine
            );
            return RepairEvent::OutOfStock {
                target: broken.name().to_string(),
                requested: diagnosis.requested,
                fine: self.fine,
            };
        };

        // A rejected spare is not returned to the warehouse
        match car.try_replace(spare, broken) {
            Ok(_) => {
                debug!("Replaced {}", broken.name());
                RepairEvent::Replaced {
                    part: broken.name().to_string(),
                    misdiagnosed: diagnosis.mistaken,
                }
            }
            Err(rejected) => {
                self.ledger.record_fine(self.fine);
                warn!(
                    "Fitted {} in place of {}, shop fined {}",
                    rejected.name(),
                    broken.name(),
                    self.fine
                );
                RepairEvent::Misrepaired {
                    target: broken.name().to_string(),
                    withdrawn: rejected.name().to_string(),
                    fine: self.fine,
                }
            }
        }
    }

    /// Decide which part to order for `broken`
    /// With `mistake_chance` percent the technician picks a random part of the car instead
    fn diagnose(&self, car: &Car, broken: &Part, rng: &mut dyn RandomSource) -> Diagnosis {
        let chance = rng.uniform(0, MAX_CHANCE);
        if chance < self.mistake_chance {
            if let Some(part) = car.parts().get(rng.index(car.len())) {
                return Diagnosis {
                    requested: part.name().to_string(),
                    mistaken: true,
                };
            }
        }

        Diagnosis {
            requested: broken.name().to_string(),
            mistaken: false,
        }
    }

    fn bill(&mut self, customer: &mut Customer, repair_cost: Money) -> BillingOutcome {
        if customer.can_pay(repair_cost) {
            self.ledger.record_payment(repair_cost);
            customer.pay(repair_cost);
            BillingOutcome::Paid(repair_cost)
        } else {
            warn!(
                "Customer {} cannot pay {} (has {})",
                customer.id,
                repair_cost,
                customer.money()
            );
            BillingOutcome::InsufficientFunds {
                required: repair_cost,
                available: customer.money(),
            }
        }
    }
}
