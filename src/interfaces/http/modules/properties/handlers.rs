//! Property REST API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreatePropertyRequest, PropertyResponse};
use crate::interfaces::http::common::{ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::state::RentalState;

#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All properties in insertion order", body = ApiResponse<Vec<PropertyResponse>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_properties(State(state): State<RentalState>) -> ApiResult<Vec<PropertyResponse>> {
    let properties = state.rental.get_properties().await?;
    Ok(Json(ApiResponse::success(
        properties.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "Properties",
    security(("bearer_auth" = [])),
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property created", body = ApiResponse<PropertyResponse>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_property(
    State(state): State<RentalState>,
    ValidatedJson(request): ValidatedJson<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PropertyResponse>>), ApiError> {
    let property = state.rental.add_property(request.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(property.into()))))
}
