use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BusinessInfo, Receipt};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHeader {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<BusinessInfo> for BusinessHeader {
    fn from(b: BusinessInfo) -> Self {
        Self {
            name: b.name,
            email: b.email,
            phone: b.phone,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReceiptLineDto {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub number: String,
    pub payment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<BusinessHeader>,
    pub lines: Vec<ReceiptLineDto>,
    /// Plain-text rendering for printing
    pub text: String,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        let text = receipt.to_text();
        Self {
            number: receipt.number,
            payment_id: receipt.payment_id,
            business: receipt.business.map(Into::into),
            lines: receipt
                .lines
                .into_iter()
                .map(|l| ReceiptLineDto {
                    label: l.label.to_string(),
                    value: l.value,
                })
                .collect(),
            text,
        }
    }
}
