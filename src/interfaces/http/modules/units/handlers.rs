//! Unit REST API handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUnitRequest, ListUnitsParams, UnitResponse};
use crate::interfaces::http::common::{ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::state::RentalState;

#[utoipa::path(
    get,
    path = "/api/units",
    tag = "Units",
    security(("bearer_auth" = [])),
    params(ListUnitsParams),
    responses(
        (status = 200, description = "Units, optionally filtered by property", body = ApiResponse<Vec<UnitResponse>>),
        (status = 400, description = "Malformed query"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_units(
    State(state): State<RentalState>,
    params: Result<Query<ListUnitsParams>, QueryRejection>,
) -> ApiResult<Vec<UnitResponse>> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let units = state.rental.get_units(params.property_id.as_deref()).await?;
    Ok(Json(ApiResponse::success(
        units.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/units",
    tag = "Units",
    security(("bearer_auth" = [])),
    request_body = CreateUnitRequest,
    responses(
        (status = 201, description = "Unit created", body = ApiResponse<UnitResponse>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_unit(
    State(state): State<RentalState>,
    ValidatedJson(request): ValidatedJson<CreateUnitRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UnitResponse>>), ApiError> {
    let unit = state.rental.add_unit(request.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(unit.into()))))
}
