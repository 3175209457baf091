//! Rentable unit aggregate

pub mod model;

pub use model::{NewUnit, Unit, UnitStatus};
