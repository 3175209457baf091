//! Tenant aggregate

pub mod model;

pub use model::{NewTenant, Tenant, TenantStatus};
