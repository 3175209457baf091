//! Receipt handler

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::ReceiptResponse;
use crate::domain::Receipt;
use crate::interfaces::http::common::{ApiResponse, ApiResult};
use crate::interfaces::http::state::RentalState;

#[utoipa::path(
    get,
    path = "/api/payments/{id}/receipt",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Printable receipt", body = ApiResponse<ReceiptResponse>),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn get_receipt(
    State(state): State<RentalState>,
    Path(id): Path<String>,
) -> ApiResult<ReceiptResponse> {
    let payment = state.rental.get_payment(&id).await?;
    let receipt = Receipt::render(&payment, state.business.as_ref());
    Ok(Json(ApiResponse::success(receipt.into())))
}
