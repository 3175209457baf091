use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{BillingMonth, NewPayment, Payment, PaymentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusDto {
    Paid,
    Partial,
    Pending,
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(s: PaymentStatus) -> Self {
        match s {
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Partial => Self::Partial,
            PaymentStatus::Pending => Self::Pending,
        }
    }
}

impl From<PaymentStatusDto> for PaymentStatus {
    fn from(s: PaymentStatusDto) -> Self {
        match s {
            PaymentStatusDto::Paid => Self::Paid,
            PaymentStatusDto::Partial => Self::Partial,
            PaymentStatusDto::Pending => Self::Pending,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    #[validate(length(min = 1, message = "tenantId is required"))]
    pub tenant_id: String,
    #[validate(length(min = 1, message = "unitId is required"))]
    pub unit_id: String,
    #[schema(value_type = f64, example = 1200.0)]
    pub amount: Decimal,
    /// Defaults to today (UTC)
    #[schema(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
    pub status: PaymentStatusDto,
    /// e.g. `cash`, `bank_transfer`, `mobile_money`
    #[validate(length(min = 1, max = 50, message = "method is required"))]
    pub method: String,
    #[schema(value_type = String, example = "2024-03")]
    pub month_covered: BillingMonth,
    #[validate(length(max = 100))]
    pub reference: Option<String>,
}

impl From<RecordPaymentRequest> for NewPayment {
    fn from(req: RecordPaymentRequest) -> Self {
        Self {
            tenant_id: req.tenant_id,
            unit_id: req.unit_id,
            amount: req.amount,
            date: req.date.unwrap_or_else(|| Utc::now().date_naive()),
            status: req.status.into(),
            method: req.method,
            month_covered: req.month_covered,
            reference: req.reference.filter(|r| !r.is_empty()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: String,
    pub tenant_id: String,
    pub unit_id: String,
    #[schema(value_type = f64)]
    pub amount: Decimal,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub status: PaymentStatusDto,
    pub method: String,
    #[schema(value_type = String)]
    pub month_covered: BillingMonth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            tenant_id: p.tenant_id,
            unit_id: p.unit_id,
            amount: p.amount,
            date: p.date,
            status: p.status.into(),
            method: p.method,
            month_covered: p.month_covered,
            reference: p.reference,
        }
    }
}
