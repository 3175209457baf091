use super::UserRole;

/// Input for registering a new user. The password is still in clear text
/// here; it is hashed before reaching the store.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}
