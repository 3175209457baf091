//! Payment REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{PaymentResponse, RecordPaymentRequest};
use crate::interfaces::http::common::{ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::state::RentalState;

#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All payments", body = ApiResponse<Vec<PaymentResponse>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_payments(State(state): State<RentalState>) -> ApiResult<Vec<PaymentResponse>> {
    let payments = state.rental.get_payments().await?;
    Ok(Json(ApiResponse::success(
        payments.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment details", body = ApiResponse<PaymentResponse>),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn get_payment(
    State(state): State<RentalState>,
    Path(id): Path<String>,
) -> ApiResult<PaymentResponse> {
    let payment = state.rental.get_payment(&id).await?;
    Ok(Json(ApiResponse::success(payment.into())))
}

#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    request_body = RecordPaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = ApiResponse<PaymentResponse>),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn record_payment(
    State(state): State<RentalState>,
    ValidatedJson(request): ValidatedJson<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentResponse>>), ApiError> {
    let payment = state.rental.record_payment(request.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(payment.into()))))
}
