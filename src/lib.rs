//! # RentDesk
//!
//! Back office for small landlords and caretakers: properties, units,
//! tenants, rent payments, receipts and an occupancy / collection dashboard,
//! served as a JSON API next to the single-page front-end.
//!
//! ## Architecture
//!
//! - **domain**: entities, dashboard statistics, receipt rendering and the
//!   `RentalStore` port
//! - **application**: rental and identity use-cases, simulated latency
//! - **infrastructure**: in-memory seeded store, password hashing, JWT
//! - **interfaces**: axum HTTP API, Swagger UI and SPA hosting
//! - **shared**: errors, ids, graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};
pub use infrastructure::InMemoryStore;
pub use interfaces::http::{create_api_router, ApiState};
