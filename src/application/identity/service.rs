//! Identity service: authentication and registration use-cases

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::latency::LatencySimulator;
use crate::domain::{CreateUserDto, DomainError, DomainResult, RentalStore, User, UserRole};
use crate::infrastructure::crypto::jwt::{create_token, verify_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password, DEFAULT_HASH_COST};
use crate::shared::new_id;

const MIN_PASSWORD_LEN: usize = 8;

/// Authentication result returned after a successful login or registration
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

pub struct IdentityService {
    store: Arc<dyn RentalStore>,
    jwt_config: JwtConfig,
    latency: LatencySimulator,
    allow_passwordless_seed_login: bool,
    hash_cost: u32,
}

impl IdentityService {
    pub fn new(store: Arc<dyn RentalStore>, jwt_config: JwtConfig, latency: LatencySimulator) -> Self {
        Self {
            store,
            jwt_config,
            latency,
            allow_passwordless_seed_login: true,
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    /// Whether accounts without a stored password may log in by email and role.
    pub fn with_passwordless_seed_login(mut self, allow: bool) -> Self {
        self.allow_passwordless_seed_login = allow;
        self
    }

    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    // ── Authentication ──────────────────────────────────────────

    /// Log in with an exact, case-sensitive email and role match.
    pub async fn login(
        &self,
        email: &str,
        role: UserRole,
        password: Option<&str>,
    ) -> DomainResult<AuthResult> {
        self.latency.pause().await;

        let Some(user) = self.store.find_user_by_login(email, role).await? else {
            info!(email, role = %role, "Login rejected: no matching user");
            return Err(DomainError::InvalidCredentials);
        };

        match self.store.password_hash(&user.id).await? {
            Some(hash) => {
                let Some(password) = password else {
                    return Err(DomainError::InvalidCredentials);
                };
                let valid = verify_password(password, &hash).unwrap_or_else(|e| {
                    warn!(user_id = %user.id, error = %e, "Stored password hash is unreadable");
                    false
                });
                if !valid {
                    info!(user_id = %user.id, "Login rejected: wrong password");
                    return Err(DomainError::InvalidCredentials);
                }
            }
            None if !self.allow_passwordless_seed_login => {
                info!(user_id = %user.id, "Login rejected: passwordless login disabled");
                return Err(DomainError::InvalidCredentials);
            }
            None => {}
        }

        info!(user_id = %user.id, role = %user.role, "User logged in");
        self.issue(user)
    }

    // ── Registration ────────────────────────────────────────────

    pub async fn register(&self, dto: CreateUserDto) -> DomainResult<AuthResult> {
        self.latency.pause().await;

        let name = dto.name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("Name is required".into()));
        }
        if !dto.email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".into()));
        }
        if dto.password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        // Fast path; the store re-checks under its write lock.
        if self.store.email_taken(&dto.email).await? {
            return Err(DomainError::Conflict("Email already registered".into()));
        }

        let password_hash = hash_password(&dto.password, self.hash_cost)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))?;

        let user = User {
            id: new_id(),
            name: name.to_string(),
            email: dto.email,
            role: dto.role,
        };
        let user = self.store.insert_user(user, Some(password_hash)).await?;

        info!(user_id = %user.id, role = %user.role, "New user registered");
        self.issue(user)
    }

    // ── Sessions ────────────────────────────────────────────────

    /// Resolve the user behind a bearer token. Tokens naming a user the
    /// store no longer holds (e.g. issued before a restart) are rejected.
    pub async fn authenticate(&self, token: &str) -> DomainResult<User> {
        let claims = verify_token(token, &self.jwt_config)
            .map_err(|_| DomainError::Unauthorized("Invalid or expired token".into()))?;

        self.store
            .find_user(&claims.sub)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Unknown user".into()))
    }

    fn issue(&self, user: User) -> DomainResult<AuthResult> {
        let token = create_token(&user, &self.jwt_config)
            .map_err(|e| DomainError::Internal(format!("Failed to create token: {}", e)))?;

        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expires_in_seconds(),
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryStore;

    fn service() -> IdentityService {
        IdentityService::new(
            Arc::new(InMemoryStore::new()),
            JwtConfig::default(),
            LatencySimulator::disabled(),
        )
        .with_hash_cost(4)
    }

    fn registration(email: &str) -> CreateUserDto {
        CreateUserDto {
            name: "Frank Owner".into(),
            email: email.into(),
            password: "correct horse".into(),
            role: UserRole::Admin,
        }
    }

    #[tokio::test]
    async fn seeded_user_logs_in_with_email_and_role() {
        let result = service()
            .login("admin@rentals.com", UserRole::Admin, None)
            .await
            .unwrap();

        assert_eq!(result.user.id, "u1");
        assert_eq!(result.token_type, "Bearer");
        assert_eq!(result.expires_in, 24 * 3600);
    }

    #[tokio::test]
    async fn role_mismatch_is_rejected() {
        let err = service()
            .login("admin@rentals.com", UserRole::Caretaker, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_email_is_rejected() {
        let err = service()
            .login("nobody@x.com", UserRole::Admin, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn passwordless_login_can_be_disabled() {
        let svc = service().with_passwordless_seed_login(false);
        let err = svc
            .login("caretaker@rentals.com", UserRole::Caretaker, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn registered_user_needs_the_right_password() {
        let svc = service();
        let registered = svc.register(registration("frank@example.com")).await.unwrap();

        let ok = svc
            .login("frank@example.com", UserRole::Admin, Some("correct horse"))
            .await
            .unwrap();
        assert_eq!(ok.user.id, registered.user.id);

        for password in [None, Some("wrong password")] {
            let err = svc
                .login("frank@example.com", UserRole::Admin, password)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidCredentials));
        }
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_case_insensitively() {
        let err = service()
            .register(registration("Admin@Rentals.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_store_one_user() {
        let store = Arc::new(InMemoryStore::new());
        let svc = Arc::new(
            IdentityService::new(
                store.clone(),
                JwtConfig::default(),
                LatencySimulator::new(20, 20),
            )
            .with_hash_cost(4),
        );

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move { svc.register(registration("dup@example.com")).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(e) => assert!(matches!(e, DomainError::Conflict(_))),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.counts().await.unwrap().users, 3);
    }

    #[tokio::test]
    async fn short_password_is_a_validation_error() {
        let mut dto = registration("gina@example.com");
        dto.password = "short".into();
        let err = service().register(dto).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn token_resolves_back_to_user() {
        let svc = service();
        let session = svc.register(registration("hana@example.com")).await.unwrap();

        let me = svc.authenticate(&session.token).await.unwrap();
        assert_eq!(me.email, "hana@example.com");
        assert!(matches!(
            svc.authenticate("garbage").await.unwrap_err(),
            DomainError::Unauthorized(_)
        ));
    }

    #[tokio::test]
    async fn token_for_vanished_user_is_rejected() {
        let svc = service();
        let session = svc.register(registration("ivy@example.com")).await.unwrap();

        let restarted = IdentityService::new(
            Arc::new(InMemoryStore::new()),
            JwtConfig::default(),
            LatencySimulator::disabled(),
        );
        assert!(matches!(
            restarted.authenticate(&session.token).await.unwrap_err(),
            DomainError::Unauthorized(_)
        ));
    }
}
