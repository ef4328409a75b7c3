//! Money tracking for the repair shop
//!
//! The ledger lives as long as the shop that owns it, which is one run.

use super::types::Money;

/// Running balance and counters of the shop
#[derive(Debug, Clone, Default)]
pub struct ShopLedger {
    /// Shop's current money (starts at 0, fines can push it below 0)
    pub balance: Money,

    /// Total money received from customers
    pub payments_received: Money,

    /// Total money lost to fines
    pub fines_paid: Money,

    /// Number of fines charged
    pub fine_count: usize,

    /// Customers whose visit has concluded
    pub customers_served: usize,

    /// Visits where the customer could not pay
    pub unpaid_visits: usize,
}

impl ShopLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customer payment
    pub fn record_payment(&mut self, amount: Money) {
        self.balance += amount;
        self.payments_received += amount;
    }

    /// Charge a fine against the shop
    pub fn record_fine(&mut self, amount: Money) {
        self.balance -= amount;
        self.fines_paid += amount;
        self.fine_count += 1;
    }

    /// Close out a visit
    pub fn complete_visit(&mut self, paid: bool) {
        self.customers_served += 1;
        if !paid {
            self.unpaid_visits += 1;
        }
    }

    pub fn is_in_debt(&self) -> bool {
        self.balance < 0
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Balance: {} | Payments: {} | Fines: {} ({}) | Served: {} | Unpaid: {}",
            self.balance,
            self.payments_received,
            self.fines_paid,
            self.fine_count,
            self.customers_served,
            self.unpaid_visits
        )
    }
}
