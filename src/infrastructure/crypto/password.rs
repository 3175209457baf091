//! Password hashing utilities

use bcrypt::{hash, verify, DEFAULT_COST};

/// bcrypt work factor used unless configured otherwise
pub const DEFAULT_HASH_COST: u32 = DEFAULT_COST;

/// Hash a password using bcrypt. Tests pass the minimum cost (4) to stay fast.
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hashed = hash_password(password, 4).unwrap();

        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-bcrypt-hash").is_err());
    }
}
