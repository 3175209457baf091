//! User aggregate

pub mod model;

mod dto_create;

pub use dto_create::CreateUserDto;
pub use model::{User, UserRole};
