//! Identity module: login, registration and session tokens
//!
//! Seeded accounts log in by email and role alone; registered accounts also
//! carry a bcrypt hash and must present the matching password.

pub mod service;

pub use service::{AuthResult, IdentityService};
