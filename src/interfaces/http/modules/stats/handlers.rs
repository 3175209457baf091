//! Dashboard statistics handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use super::dto::{StatsParams, StatsResponse};
use crate::interfaces::http::common::{ApiError, ApiResponse, ApiResult};
use crate::interfaces::http::state::RentalState;

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    params(StatsParams),
    responses(
        (status = 200, description = "Occupancy and collection figures", body = ApiResponse<StatsResponse>),
        (status = 400, description = "Malformed month")
    )
)]
pub async fn get_stats(
    State(state): State<RentalState>,
    params: Result<Query<StatsParams>, QueryRejection>,
) -> ApiResult<StatsResponse> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let stats = match params.month {
        Some(month) => state.rental.get_stats_for(month).await?,
        None => state.rental.get_stats().await?,
    };
    Ok(Json(ApiResponse::success(stats.into())))
}
