//! Core data types shared across the calculation chain.

pub mod fuel_model;
pub mod units;

pub use fuel_model::FuelModel;
pub use units::*;
