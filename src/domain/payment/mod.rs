//! Payment aggregate

pub mod model;
pub mod month;

pub use model::{NewPayment, Payment, PaymentStatus};
pub use month::{BillingMonth, ParseBillingMonthError};
