//! Dashboard statistics derived from the store contents

use rust_decimal::Decimal;

use super::{BillingMonth, Payment, Property, Unit};

/// Portfolio summary for one billing month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub month: BillingMonth,
    pub total_properties: usize,
    pub total_units: usize,
    pub occupied_units: usize,
    pub vacant_units: usize,
    /// Whole percent, rounded half-up; 0 when there are no units
    pub occupancy_rate: u32,
    pub expected_monthly_rent: Decimal,
    pub collected_this_month: Decimal,
    pub outstanding_amount: Decimal,
}

impl Stats {
    pub fn compute(
        properties: &[Property],
        units: &[Unit],
        payments: &[Payment],
        month: BillingMonth,
    ) -> Self {
        let total_units = units.len();
        let occupied: Vec<&Unit> = units.iter().filter(|u| u.is_occupied()).collect();
        let occupied_units = occupied.len();

        let expected_monthly_rent: Decimal = occupied.iter().map(|u| u.rent_amount).sum();
        let collected_this_month: Decimal =
            payments.iter().map(|p| p.collected_for(month)).sum();

        Self {
            month,
            total_properties: properties.len(),
            total_units,
            occupied_units,
            vacant_units: total_units - occupied_units,
            occupancy_rate: occupancy_rate(occupied_units, total_units),
            expected_monthly_rent,
            collected_this_month,
            outstanding_amount: (expected_monthly_rent - collected_this_month).max(Decimal::ZERO),
        }
    }
}

/// `round(occupied / total * 100)` in integer arithmetic.
fn occupancy_rate(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((occupied * 200 + total) / (total * 2)) as u32
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{NewPayment, NewUnit, PaymentStatus, UnitStatus};

    fn unit(id: &str, rent: i64, status: UnitStatus) -> Unit {
        NewUnit {
            property_id: "p1".into(),
            unit_number: id.to_uppercase(),
            unit_type: "1 Bedroom".into(),
            rent_amount: Decimal::from(rent),
            status: Some(status),
        }
        .into_unit(id.into())
    }

    fn paid(amount: i64, month: &str, status: PaymentStatus) -> Payment {
        NewPayment {
            tenant_id: "t1".into(),
            unit_id: "un1".into(),
            amount: Decimal::from(amount),
            date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            status,
            method: "cash".into(),
            month_covered: month.parse().unwrap(),
            reference: None,
        }
        .into_payment(format!("pay-{amount}"))
    }

    fn month(s: &str) -> BillingMonth {
        s.parse().unwrap()
    }

    #[test]
    fn empty_store_has_zero_rate() {
        let stats = Stats::compute(&[], &[], &[], month("2024-05"));
        assert_eq!(stats.total_units, 0);
        assert_eq!(stats.occupancy_rate, 0);
        assert_eq!(stats.outstanding_amount, Decimal::ZERO);
    }

    #[test]
    fn three_of_four_occupied_is_75_percent() {
        let units = vec![
            unit("un1", 1200, UnitStatus::Occupied),
            unit("un2", 1500, UnitStatus::Occupied),
            unit("un3", 900, UnitStatus::Vacant),
            unit("un4", 2000, UnitStatus::Occupied),
        ];
        let stats = Stats::compute(&[], &units, &[], month("2024-05"));

        assert_eq!(stats.occupied_units, 3);
        assert_eq!(stats.vacant_units, 1);
        assert_eq!(stats.occupancy_rate, 75);
        assert_eq!(stats.expected_monthly_rent, Decimal::from(4700));
    }

    #[test]
    fn occupancy_rounds_half_up() {
        assert_eq!(occupancy_rate(1, 3), 33);
        assert_eq!(occupancy_rate(2, 3), 67);
        assert_eq!(occupancy_rate(1, 8), 13); // 12.5
        assert_eq!(occupancy_rate(5, 5), 100);
    }

    #[test]
    fn only_collected_payments_for_the_month_count() {
        let units = vec![unit("un1", 1000, UnitStatus::Occupied)];
        let payments = vec![
            paid(400, "2024-05", PaymentStatus::Paid),
            paid(100, "2024-05", PaymentStatus::Partial),
            paid(300, "2024-05", PaymentStatus::Pending),
            paid(250, "2024-04", PaymentStatus::Paid),
        ];
        let stats = Stats::compute(&[], &units, &payments, month("2024-05"));

        assert_eq!(stats.collected_this_month, Decimal::from(500));
        assert_eq!(stats.outstanding_amount, Decimal::from(500));
    }

    #[test]
    fn overpayment_never_goes_negative() {
        let units = vec![unit("un1", 1000, UnitStatus::Occupied)];
        let payments = vec![paid(1500, "2024-05", PaymentStatus::Paid)];
        let stats = Stats::compute(&[], &units, &payments, month("2024-05"));

        assert_eq!(stats.collected_this_month, Decimal::from(1500));
        assert_eq!(stats.outstanding_amount, Decimal::ZERO);
    }
}
