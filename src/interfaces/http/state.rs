//! Router state
//!
//! One `ApiState` is built at startup and owns the store and services for
//! the lifetime of the process. Each handler module extracts only the
//! slice it needs through `FromRef`.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRef;

use crate::application::{IdentityService, RentalService};
use crate::domain::{BusinessInfo, RentalStore};
use crate::interfaces::http::middleware::AuthState;

#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn RentalStore>,
    pub rental: Arc<RentalService>,
    pub identity: Arc<IdentityService>,
    pub business: Option<BusinessInfo>,
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(
        store: Arc<dyn RentalStore>,
        rental: RentalService,
        identity: IdentityService,
        business: Option<BusinessInfo>,
    ) -> Self {
        Self {
            store,
            rental: Arc::new(rental),
            identity: Arc::new(identity),
            business,
            started_at: Instant::now(),
        }
    }
}

/// State for the portfolio CRUD and dashboard handlers
#[derive(Clone)]
pub struct RentalState {
    pub rental: Arc<RentalService>,
    pub business: Option<BusinessInfo>,
}

/// State for login / registration handlers
#[derive(Clone)]
pub struct AuthHandlerState {
    pub identity: Arc<IdentityService>,
}

/// State for the health endpoint
#[derive(Clone)]
pub struct HealthState {
    pub store: Arc<dyn RentalStore>,
    pub started_at: Instant,
}

impl FromRef<ApiState> for RentalState {
    fn from_ref(s: &ApiState) -> Self {
        RentalState {
            rental: Arc::clone(&s.rental),
            business: s.business.clone(),
        }
    }
}

impl FromRef<ApiState> for AuthHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        AuthHandlerState {
            identity: Arc::clone(&s.identity),
        }
    }
}

impl FromRef<ApiState> for AuthState {
    fn from_ref(s: &ApiState) -> Self {
        AuthState {
            identity: Arc::clone(&s.identity),
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            store: Arc::clone(&s.store),
            started_at: s.started_at,
        }
    }
}
