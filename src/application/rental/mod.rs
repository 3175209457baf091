//! Rental access layer: CRUD over the portfolio and dashboard statistics

pub mod service;

pub use service::RentalService;
