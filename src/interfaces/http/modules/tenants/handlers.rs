//! Tenant REST API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateTenantRequest, TenantResponse};
use crate::interfaces::http::common::{ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::state::RentalState;

#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = "Tenants",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All tenants", body = ApiResponse<Vec<TenantResponse>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_tenants(State(state): State<RentalState>) -> ApiResult<Vec<TenantResponse>> {
    let tenants = state.rental.get_tenants().await?;
    Ok(Json(ApiResponse::success(
        tenants.into_iter().map(Into::into).collect(),
    )))
}

/// Adds the tenant and flips the referenced unit to `occupied`.
#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = "Tenants",
    security(("bearer_auth" = [])),
    request_body = CreateTenantRequest,
    responses(
        (status = 201, description = "Tenant created", body = ApiResponse<TenantResponse>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_tenant(
    State(state): State<RentalState>,
    ValidatedJson(request): ValidatedJson<CreateTenantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TenantResponse>>), ApiError> {
    let tenant = state.rental.add_tenant(request.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(tenant.into()))))
}
