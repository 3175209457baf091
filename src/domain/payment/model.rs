//! Payment domain entity

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::BillingMonth;

/// Settlement state of a payment.
///
/// A month with no payment at all is implicitly pending; `Pending` exists so
/// callers can also record a promised payment explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Partial,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Partial => "partial",
            Self::Pending => "pending",
        }
    }

    /// Whether money actually changed hands.
    pub fn is_collected(&self) -> bool {
        matches!(self, Self::Paid | Self::Partial)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: String,
    pub tenant_id: String,
    pub unit_id: String,
    pub amount: Decimal,
    /// Day the money was received
    pub date: NaiveDate,
    pub status: PaymentStatus,
    /// Free-form payment channel, e.g. "cash" or "bank_transfer"
    pub method: String,
    pub month_covered: BillingMonth,
    pub reference: Option<String>,
}

impl Payment {
    /// Amount counted towards `month`'s collections.
    pub fn collected_for(&self, month: BillingMonth) -> Decimal {
        if self.month_covered == month && self.status.is_collected() {
            self.amount
        } else {
            Decimal::ZERO
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub tenant_id: String,
    pub unit_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: PaymentStatus,
    pub method: String,
    pub month_covered: BillingMonth,
    pub reference: Option<String>,
}

impl NewPayment {
    pub fn into_payment(self, id: String) -> Payment {
        Payment {
            id,
            tenant_id: self.tenant_id,
            unit_id: self.unit_id,
            amount: self.amount,
            date: self.date,
            status: self.status,
            method: self.method,
            month_covered: self.month_covered,
            reference: self.reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(status: PaymentStatus, month: &str) -> Payment {
        NewPayment {
            tenant_id: "t1".into(),
            unit_id: "un1".into(),
            amount: Decimal::new(120_050, 2),
            date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            status,
            method: "cash".into(),
            month_covered: month.parse().unwrap(),
            reference: None,
        }
        .into_payment("pay-x".into())
    }

    #[test]
    fn paid_and_partial_count_for_their_month() {
        let march: BillingMonth = "2024-03".parse().unwrap();
        assert_eq!(
            payment(PaymentStatus::Paid, "2024-03").collected_for(march),
            Decimal::new(120_050, 2)
        );
        assert_eq!(
            payment(PaymentStatus::Partial, "2024-03").collected_for(march),
            Decimal::new(120_050, 2)
        );
    }

    #[test]
    fn pending_or_other_month_counts_nothing() {
        let march: BillingMonth = "2024-03".parse().unwrap();
        assert_eq!(
            payment(PaymentStatus::Pending, "2024-03").collected_for(march),
            Decimal::ZERO
        );
        assert_eq!(
            payment(PaymentStatus::Paid, "2024-02").collected_for(march),
            Decimal::ZERO
        );
    }
}
