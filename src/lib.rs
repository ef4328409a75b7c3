//! Repair Shop Simulation Library
//!
//! A single-window auto repair shop that serves a queue of customers,
//! repairing their cars from a shared, depleting parts warehouse.

pub mod simulation;
