//! Storage port for the rental data set

use async_trait::async_trait;

use super::{Payment, Property, Tenant, Unit, User, UserRole};
use crate::shared::DomainResult;

/// Consistent copy of the collections the dashboard aggregates over
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub properties: Vec<Property>,
    pub units: Vec<Unit>,
    pub payments: Vec<Payment>,
}

/// Record counts, for health reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: usize,
    pub properties: usize,
    pub units: usize,
    pub tenants: usize,
    pub payments: usize,
}

/// Access to users, properties, units, tenants and payments.
///
/// Lists come back in insertion order. Inserts never validate references
/// between records.
#[async_trait]
pub trait RentalStore: Send + Sync {
    // Users
    async fn find_user(&self, id: &str) -> DomainResult<Option<User>>;
    async fn find_user_by_login(&self, email: &str, role: UserRole) -> DomainResult<Option<User>>;
    /// Case-insensitive email lookup, used for duplicate detection
    async fn email_taken(&self, email: &str) -> DomainResult<bool>;
    async fn insert_user(&self, user: User, password_hash: Option<String>) -> DomainResult<User>;
    async fn password_hash(&self, user_id: &str) -> DomainResult<Option<String>>;

    // Properties
    async fn list_properties(&self) -> DomainResult<Vec<Property>>;
    async fn insert_property(&self, property: Property) -> DomainResult<Property>;

    // Units
    async fn list_units(&self, property_id: Option<&str>) -> DomainResult<Vec<Unit>>;
    async fn insert_unit(&self, unit: Unit) -> DomainResult<Unit>;

    // Tenants
    async fn list_tenants(&self) -> DomainResult<Vec<Tenant>>;
    /// Append `tenant` and mark its unit occupied in one step. Returns whether
    /// a unit with the tenant's `unit_id` existed.
    async fn insert_tenant(&self, tenant: Tenant) -> DomainResult<(Tenant, bool)>;

    // Payments
    async fn list_payments(&self) -> DomainResult<Vec<Payment>>;
    async fn find_payment(&self, id: &str) -> DomainResult<Option<Payment>>;
    async fn insert_payment(&self, payment: Payment) -> DomainResult<Payment>;

    // Aggregates
    async fn snapshot(&self) -> DomainResult<StoreSnapshot>;
    async fn counts(&self) -> DomainResult<StoreCounts>;
}
