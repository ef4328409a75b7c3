//! Simulation run that ties everything together
//!
//! This is the entry point for running the repair shop: it stocks the
//! warehouse, lines up customers and serves them one at a time.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use log::info;

use super::assembler::CarAssembler;
use super::config::ShopConfig;
use super::customer::Customer;
use super::part::PartCatalog;
use super::random::{RandomSource, SimRandom};
use super::shop::{BillingOutcome, RepairEvent, RepairShop, VisitReport};
use super::types::{CustomerId, SimId};
use super::warehouse::Warehouse;

/// One run of the repair shop
pub struct SimWorld {
    config: ShopConfig,

    assembler: CarAssembler,

    /// The shop, which owns the warehouse and the ledger
    pub shop: RepairShop,

    /// Customers waiting to be served, front is served first
    queue: VecDeque<Customer>,

    /// Customers whose visit has concluded, in service order
    pub served: Vec<Customer>,

    /// Reports for every concluded visit, in service order
    pub reports: Vec<VisitReport>,

    /// Next ID to assign
    next_id: usize,

    rng: Box<dyn RandomSource>,
}

impl SimWorld {
    fn new_internal(config: ShopConfig, rng: Box<dyn RandomSource>) -> Result<Self> {
        config.validate().context("Invalid shop configuration")?;

        let mut catalog = PartCatalog::new();
        let spares: Vec<_> = (0..config.warehouse_sets)
            .flat_map(|_| catalog.create())
            .collect();
        let warehouse = Warehouse::from_parts(spares);
        info!(
            "Warehouse stocked with {} spares ({} catalog sets)",
            warehouse.total_stock(),
            config.warehouse_sets
        );

        let assembler =
            CarAssembler::with_broken_range(catalog, config.min_broken, config.max_broken);
        let shop = RepairShop::with_config(warehouse, &config);

        Ok(Self {
            config,
            assembler,
            shop,
            queue: VecDeque::new(),
            served: Vec::new(),
            reports: Vec::new(),
            next_id: 0,
            rng,
        })
    }

    /// Create a run from `config`, seeding the RNG if the config carries a seed
    pub fn new(config: ShopConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => SimRandom::with_seed(seed),
            None => SimRandom::new(),
        };
        Self::new_internal(config, Box::new(rng))
    }

    /// Create a run with a seeded RNG and default settings
    pub fn new_with_seed(seed: u64) -> Result<Self> {
        Self::new(ShopConfig {
            seed: Some(seed),
            ..ShopConfig::default()
        })
    }

    /// Create a run that draws every random value from `rng`
    pub fn with_random(config: ShopConfig, rng: Box<dyn RandomSource>) -> Result<Self> {
        Self::new_internal(config, rng)
    }

    fn next_customer_id(&mut self) -> CustomerId {
        let id = CustomerId(SimId(self.next_id));
        self.next_id += 1;
        id
    }

    /// Assemble `count` cars and line their owners up
    pub fn enqueue_customers(&mut self, count: usize) {
        for _ in 0..count {
            let car = self.assembler.assemble(self.rng.as_mut());
            let id = self.next_customer_id();
            self.queue
                .push_back(Customer::new(id, self.config.starting_funds, car));
        }
        info!("{} customers waiting", self.queue.len());
    }

    /// Fill the queue with as many customers as the config asks for
    pub fn populate(&mut self) {
        self.enqueue_customers(self.config.customers);
    }

    pub fn waiting(&self) -> usize {
        self.queue.len()
    }

    /// Serve the customer at the front of the queue
    /// Returns None when nobody is waiting
    pub fn serve_next(&mut self) -> Option<&VisitReport> {
        let mut customer = self.queue.pop_front()?;
        let report = self.shop.serve(&mut customer, self.rng.as_mut());
        self.served.push(customer);
        self.reports.push(report);
        self.reports.last()
    }

    /// Serve everybody left in the queue
    pub fn run(&mut self) -> &[VisitReport] {
        let start = self.reports.len();
        while self.serve_next().is_some() {}
        &self.reports[start..]
    }

    /// Print one visit the way the front desk sees it
    pub fn print_visit(&self, index: usize) {
        if let Some(text) = self.format_visit(index) {
            print!("{}", text);
        }
    }

    /// Render the visit at `index` in service order
    /// Returns None if that visit has not happened yet
    pub fn format_visit(&self, index: usize) -> Option<String> {
        let report = self.reports.get(index)?;
        let customer = self.served.get(index)?;
        let mut out = String::new();
        Self::write_visit(&mut out, index, report, customer).ok()?;
        Some(out)
    }

    fn write_visit(
        out: &mut impl fmt::Write,
        index: usize,
        report: &VisitReport,
        customer: &Customer,
    ) -> fmt::Result {
        writeln!(out, "=== Customer {} ===", index + 1)?;
        writeln!(out, "--- Car before repair ---")?;
        for part in &report.parts_before {
            writeln!(out, "  {}", part)?;
        }
        writeln!(out, "Repair cost: {}", report.repair_cost)?;

        for event in &report.events {
            match event {
                RepairEvent::Replaced { part, misdiagnosed } => {
                    if *misdiagnosed {
                        writeln!(out, "  Replaced {} (lucky guess)", part)?;
                    } else {
                        writeln!(out, "  Replaced {}", part)?;
                    }
                }
                RepairEvent::Misrepaired {
                    target,
                    withdrawn,
                    fine,
                } => writeln!(
                    out,
                    "  Fitted {} instead of {}, paid a fine of {}",
                    withdrawn, target, fine
                )?,
                RepairEvent::OutOfStock {
                    requested, fine, ..
                } => writeln!(
                    out,
                    "  Warehouse has no {}, paid a fine of {}",
                    requested, fine
                )?,
            }
        }

        match report.billing {
            BillingOutcome::Paid(amount) => writeln!(out, "Customer paid {}", amount)?,
            BillingOutcome::InsufficientFunds {
                required,
                available,
            } => writeln!(
                out,
                "Customer does not have enough money ({} needed, {} available)",
                required, available
            )?,
        }
        writeln!(
            out,
            "Car now has {} broken parts, customer has {} left",
            customer.car().broken_count(),
            customer.money()
        )?;
        writeln!(out, "Shop balance: {}", report.shop_balance)
    }

    /// Print a summary of the run so far
    pub fn print_summary(&self) {
        let ledger = self.shop.ledger();
        let warehouse = self.shop.warehouse();
        println!("=== Repair Shop Summary ===");
        println!("{}", ledger.summary());
        println!("Customers waiting: {}", self.queue.len());
        println!(
            "Fully repaired cars: {}/{}",
            self.reports.iter().filter(|r| r.fully_repaired()).count(),
            self.reports.len()
        );
        println!("Spares left: {}", warehouse.total_stock());
        for name in warehouse.names_in_stock() {
            println!("  {}: {}", name, warehouse.stock_of(name));
        }
    }
}
