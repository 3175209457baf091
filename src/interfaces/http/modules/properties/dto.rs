use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewProperty, Property};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 500, message = "address is required"))]
    pub address: String,
    pub caretaker_id: Option<String>,
}

impl From<CreatePropertyRequest> for NewProperty {
    fn from(req: CreatePropertyRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            caretaker_id: req.caretaker_id.filter(|id| !id.is_empty()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caretaker_id: Option<String>,
}

impl From<Property> for PropertyResponse {
    fn from(p: Property) -> Self {
        Self {
            id: p.id,
            name: p.name,
            address: p.address,
            caretaker_id: p.caretaker_id,
        }
    }
}
