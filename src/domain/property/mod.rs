//! Property aggregate

pub mod model;

pub use model::{NewProperty, Property};
