use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{NewUnit, Unit, UnitStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatusDto {
    Occupied,
    Vacant,
}

impl From<UnitStatus> for UnitStatusDto {
    fn from(s: UnitStatus) -> Self {
        match s {
            UnitStatus::Occupied => Self::Occupied,
            UnitStatus::Vacant => Self::Vacant,
        }
    }
}

impl From<UnitStatusDto> for UnitStatus {
    fn from(s: UnitStatusDto) -> Self {
        match s {
            UnitStatusDto::Occupied => Self::Occupied,
            UnitStatusDto::Vacant => Self::Vacant,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListUnitsParams {
    /// Only return units of this property
    pub property_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitRequest {
    #[validate(length(min = 1, message = "propertyId is required"))]
    pub property_id: String,
    #[validate(length(min = 1, max = 50, message = "unitNumber is required"))]
    pub unit_number: String,
    #[validate(length(min = 1, max = 100, message = "unitType is required"))]
    pub unit_type: String,
    #[schema(value_type = f64, example = 1200.0)]
    pub rent_amount: Decimal,
    /// Defaults to `vacant`
    pub status: Option<UnitStatusDto>,
}

impl From<CreateUnitRequest> for NewUnit {
    fn from(req: CreateUnitRequest) -> Self {
        Self {
            property_id: req.property_id,
            unit_number: req.unit_number,
            unit_type: req.unit_type,
            rent_amount: req.rent_amount,
            status: req.status.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitResponse {
    pub id: String,
    pub property_id: String,
    pub unit_number: String,
    pub unit_type: String,
    #[schema(value_type = f64)]
    pub rent_amount: Decimal,
    pub status: UnitStatusDto,
}

impl From<Unit> for UnitResponse {
    fn from(u: Unit) -> Self {
        Self {
            id: u.id,
            property_id: u.property_id,
            unit_number: u.unit_number,
            unit_type: u.unit_type,
            rent_amount: u.rent_amount,
            status: u.status.into(),
        }
    }
}
