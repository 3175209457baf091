use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewTenant, Tenant, TenantStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatusDto {
    Active,
    Inactive,
}

impl From<TenantStatus> for TenantStatusDto {
    fn from(s: TenantStatus) -> Self {
        match s {
            TenantStatus::Active => Self::Active,
            TenantStatus::Inactive => Self::Inactive,
        }
    }
}

impl From<TenantStatusDto> for TenantStatus {
    fn from(s: TenantStatusDto) -> Self {
        match s {
            TenantStatusDto::Active => Self::Active,
            TenantStatusDto::Inactive => Self::Inactive,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    /// Unit the tenant moves into; it is marked occupied
    #[validate(length(min = 1, message = "unitId is required"))]
    pub unit_id: String,
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "invalid email format"))]
    pub email: Option<String>,
    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub lease_start: NaiveDate,
    /// Defaults to `active`
    pub status: Option<TenantStatusDto>,
}

impl From<CreateTenantRequest> for NewTenant {
    fn from(req: CreateTenantRequest) -> Self {
        Self {
            unit_id: req.unit_id,
            name: req.name,
            phone: req.phone,
            email: req.email.filter(|e| !e.is_empty()),
            lease_start: req.lease_start,
            status: req.status.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantResponse {
    pub id: String,
    pub unit_id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub lease_start: NaiveDate,
    pub status: TenantStatusDto,
}

impl From<Tenant> for TenantResponse {
    fn from(t: Tenant) -> Self {
        Self {
            id: t.id,
            unit_id: t.unit_id,
            name: t.name,
            phone: t.phone,
            email: t.email,
            lease_start: t.lease_start,
            status: t.status.into(),
        }
    }
}
