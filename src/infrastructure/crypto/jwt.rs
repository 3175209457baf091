//! JWT Token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::User;

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-config".to_string(),
            expiration_hours: 24,
            issuer: "rentdesk".to_string(),
        }
    }
}

impl JwtConfig {
    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_hours * 3600
    }
}

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    pub name: String,
    /// `admin` or `caretaker`
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    pub iss: String,
}

impl TokenClaims {
    pub fn for_user(user: &User, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(config.expiration_hours);

        Self {
            sub: user.id.clone(),
            name: user.name.clone(),
            role: user.role.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }
}

/// Create a signed token for a user
pub fn create_token(user: &User, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        &TokenClaims::for_user(user, config),
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode a token. Expiry is checked by the decoder.
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;

    fn user() -> User {
        User {
            id: "u1".into(),
            name: "Admin User".into(),
            email: "admin@rentals.com".into(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn token_round_trip_keeps_claims() {
        let config = JwtConfig::default();
        let token = create_token(&user(), &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.iss, "rentdesk");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(&user(), &JwtConfig::default()).unwrap();
        let other = JwtConfig {
            secret: "different".into(),
            ..JwtConfig::default()
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = JwtConfig {
            expiration_hours: -2,
            ..JwtConfig::default()
        };
        let token = create_token(&user(), &config).unwrap();
        assert!(verify_token(&token, &config).is_err());
    }
}
