//! Health check handler

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::StoreCounts;
use crate::interfaces::http::state::HealthState;

/// Service health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Absent when the store could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<RecordCounts>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordCounts {
    pub users: usize,
    pub properties: usize,
    pub units: usize,
    pub tenants: usize,
    pub payments: usize,
}

impl From<StoreCounts> for RecordCounts {
    fn from(c: StoreCounts) -> Self {
        Self {
            users: c.users,
            properties: c.properties,
            units: c.units,
            tenants: c.tenants,
            payments: c.payments,
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Store unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime = state.started_at.elapsed().as_secs();

    let (status, http_status, records) = match state.store.counts().await {
        Ok(counts) => ("ok", StatusCode::OK, Some(counts.into())),
        Err(e) => {
            tracing::error!(error = %e, "Health check could not read the store");
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, None)
        }
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            records,
        }),
    )
}
