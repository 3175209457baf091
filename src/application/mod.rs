pub mod identity;
pub mod latency;
pub mod rental;

// Re-export key types for convenience
pub use identity::{AuthResult, IdentityService};
pub use latency::LatencySimulator;
pub use rental::RentalService;
