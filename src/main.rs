use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use repair_shop::simulation::{
    Money, ShopConfig, SimWorld, FINE_AMOUNT, MISTAKE_CHANCE, QUEUE_SIZE, STARTING_FUNDS,
};

#[derive(Parser)]
#[command(name = "repair_shop")]
#[command(about = "Single-window auto repair shop simulation")]
struct Cli {
    /// Number of customers waiting in line
    #[arg(long, default_value_t = QUEUE_SIZE)]
    customers: usize,

    /// Money each customer arrives with
    #[arg(long, default_value_t = STARTING_FUNDS)]
    funds: Money,

    /// Fine the shop pays for a stockout or a wrong replacement
    #[arg(long, default_value_t = FINE_AMOUNT)]
    fine: Money,

    /// Chance (percent) that a technician orders the wrong part
    #[arg(long, default_value_t = MISTAKE_CHANCE)]
    mistake_chance: i32,

    /// Number of full catalog sets the warehouse starts with
    #[arg(long, default_value_t = 1)]
    warehouse_sets: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Wait for Enter between customers
    #[arg(long)]
    step: bool,
}

impl Cli {
    fn shop_config(&self) -> ShopConfig {
        ShopConfig {
            customers: self.customers,
            starting_funds: self.funds,
            fine: self.fine,
            mistake_chance: self.mistake_chance,
            warehouse_sets: self.warehouse_sets,
            seed: self.seed,
            ..ShopConfig::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let mut world = SimWorld::new(cli.shop_config())?;
    world.populate();
    info!("SERVING CUSTOMERS");

    let stdin = std::io::stdin();
    let mut index = 0;
    while world.serve_next().is_some() {
        world.print_visit(index);
        println!();
        index += 1;

        if cli.step && world.waiting() > 0 {
            let mut line = String::new();
            stdin
                .lock()
                .read_line(&mut line)
                .context("Failed to read from stdin")?;
        }
    }

    world.print_summary();

    let ledger = world.shop.ledger();
    info!("=== SIMULATION COMPLETE ===");
    info!("Customers served: {}", ledger.customers_served);
    info!("Fines paid: {}", ledger.fines_paid);
    info!("Shop balance: {}", ledger.balance);

    Ok(())
}
