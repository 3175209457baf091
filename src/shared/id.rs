//! Record identifiers
//!
//! Every record created at runtime gets a random UUID v4 rendered in its
//! hyphenated form. With 122 random bits the chance of a collision stays
//! below 1e-18 until well past a billion records.

use uuid::Uuid;

/// Generate a fresh opaque record id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
