pub mod payment;
pub mod property;
pub mod receipt;
pub mod stats;
pub mod store;
pub mod tenant;
pub mod unit;
pub mod user;

// Re-export commonly used types
pub use payment::{BillingMonth, NewPayment, Payment, PaymentStatus};
pub use property::{NewProperty, Property};
pub use receipt::{BusinessInfo, Receipt, ReceiptLine};
pub use stats::Stats;
pub use store::{RentalStore, StoreCounts, StoreSnapshot};
pub use tenant::{NewTenant, Tenant, TenantStatus};
pub use unit::{NewUnit, Unit, UnitStatus};
pub use user::{CreateUserDto, User, UserRole};

pub use crate::shared::errors::{DomainError, DomainResult};
