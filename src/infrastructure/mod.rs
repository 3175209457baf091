//! Infrastructure layer - storage and crypto

pub mod crypto;
pub mod storage;

pub use storage::InMemoryStore;
