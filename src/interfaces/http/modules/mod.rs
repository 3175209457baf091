//! HTTP API modules, one per resource

pub mod auth;
pub mod health;
pub mod metrics;
pub mod payments;
pub mod properties;
pub mod receipts;
pub mod request_id;
pub mod stats;
pub mod tenants;
pub mod units;
