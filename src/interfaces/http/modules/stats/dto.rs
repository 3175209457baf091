use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{BillingMonth, Stats};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsParams {
    /// `YYYY-MM`; defaults to the current month
    #[param(value_type = Option<String>, example = "2024-01")]
    pub month: Option<BillingMonth>,
}

/// Dashboard figures
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[schema(value_type = String, example = "2024-01")]
    pub month: BillingMonth,
    pub total_properties: usize,
    pub total_units: usize,
    pub occupied_units: usize,
    pub vacant_units: usize,
    /// Whole percent, rounded half-up
    pub occupancy_rate: u32,
    #[schema(value_type = f64)]
    pub expected_monthly_rent: Decimal,
    #[schema(value_type = f64)]
    pub collected_this_month: Decimal,
    #[schema(value_type = f64)]
    pub outstanding_amount: Decimal,
}

impl From<Stats> for StatsResponse {
    fn from(s: Stats) -> Self {
        Self {
            month: s.month,
            total_properties: s.total_properties,
            total_units: s.total_units,
            occupied_units: s.occupied_units,
            vacant_units: s.vacant_units,
            occupancy_rate: s.occupancy_rate,
            expected_monthly_rent: s.expected_monthly_rent,
            collected_this_month: s.collected_this_month,
            outstanding_amount: s.outstanding_amount,
        }
    }
}
