//! Customers waiting in line at the shop

use super::car::Car;
use super::types::{CustomerId, Money};

/// A driver who brings exactly one car to the shop
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    money: Money,
    car: Car,
}

impl Customer {
    pub fn new(id: CustomerId, money: Money, car: Car) -> Self {
        Self { id, money, car }
    }

    pub fn money(&self) -> Money {
        self.money
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }

    /// Check if the customer can afford `price`
    pub fn can_pay(&self, price: Money) -> bool {
        self.money >= price
    }

    /// Deduct `price` from the customer's money
    /// Does not check the balance; gate every call with [`Customer::can_pay`]
    pub fn pay(&mut self, price: Money) {
        self.money -= price;
    }
}
