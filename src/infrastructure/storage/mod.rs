//! Storage implementations

mod memory;
mod seed;

pub use memory::InMemoryStore;
