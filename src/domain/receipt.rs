//! Printable payment receipts
//!
//! Rendering is a pure function of one [`Payment`] and the optional business
//! details printed in the header. Nothing here touches the store.

use super::Payment;

/// Business details shown at the top of a receipt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl BusinessInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// One labelled row of the receipt body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// `RCPT-` followed by the first eight characters of the payment id
    pub number: String,
    pub payment_id: String,
    pub business: Option<BusinessInfo>,
    pub lines: Vec<ReceiptLine>,
}

const RULE_WIDTH: usize = 40;
const FALLBACK_TITLE: &str = "Rent Payment Receipt";

impl Receipt {
    pub fn render(payment: &Payment, business: Option<&BusinessInfo>) -> Self {
        let business = business.filter(|b| !b.is_empty()).cloned();

        let mut lines = vec![
            line("Receipt No", receipt_number(&payment.id)),
            line("Date", payment.date.format("%Y-%m-%d").to_string()),
            line("Tenant", payment.tenant_id.clone()),
            line("Unit", payment.unit_id.clone()),
            line("Month Covered", payment.month_covered.to_string()),
            line("Amount", format!("{:.2}", payment.amount)),
            line("Method", payment.method.clone()),
            line("Status", payment.status.as_str().to_uppercase()),
        ];
        if let Some(reference) = payment.reference.as_deref().filter(|r| !r.is_empty()) {
            lines.push(line("Reference", reference.to_string()));
        }

        Self {
            number: receipt_number(&payment.id),
            payment_id: payment.id.clone(),
            business,
            lines,
        }
    }

    /// Fixed-width plain-text rendering suitable for printing.
    pub fn to_text(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = vec![rule.clone()];

        match &self.business {
            Some(b) => {
                out.push(b.name.as_deref().unwrap_or(FALLBACK_TITLE).to_string());
                out.extend(b.email.as_ref().map(|email| format!("Email: {email}")));
                out.extend(b.phone.as_ref().map(|phone| format!("Phone: {phone}")));
            }
            None => out.push(FALLBACK_TITLE.to_string()),
        }
        out.push(rule.clone());

        let label_width = self.lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
        out.extend(
            self.lines
                .iter()
                .map(|l| format!("{:<width$}  {}", l.label, l.value, width = label_width)),
        );

        out.push(rule);
        out.push("Thank you for your payment.".to_string());

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

fn line(label: &'static str, value: String) -> ReceiptLine {
    ReceiptLine { label, value }
}

fn receipt_number(payment_id: &str) -> String {
    let short: String = payment_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(8)
        .collect();
    format!("RCPT-{}", short.to_uppercase())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{NewPayment, PaymentStatus};

    fn payment() -> Payment {
        NewPayment {
            tenant_id: "t1".into(),
            unit_id: "un1".into(),
            amount: Decimal::new(1200, 0),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            status: PaymentStatus::Paid,
            method: "bank_transfer".into(),
            month_covered: "2024-01".parse().unwrap(),
            reference: Some("TRX-881".into()),
        }
        .into_payment("3f2a9c1e-77aa-4b1d-9a8e-1234567890ab".into())
    }

    #[test]
    fn number_uses_payment_id_prefix() {
        let receipt = Receipt::render(&payment(), None);
        assert_eq!(receipt.number, "RCPT-3F2A9C1E");
    }

    #[test]
    fn lines_cover_payment_fields() {
        let receipt = Receipt::render(&payment(), None);
        let value = |label: &str| {
            receipt
                .lines
                .iter()
                .find(|l| l.label == label)
                .map(|l| l.value.as_str())
        };

        assert_eq!(value("Amount"), Some("1200.00"));
        assert_eq!(value("Month Covered"), Some("2024-01"));
        assert_eq!(value("Status"), Some("PAID"));
        assert_eq!(value("Reference"), Some("TRX-881"));
    }

    #[test]
    fn empty_business_info_is_dropped() {
        let receipt = Receipt::render(&payment(), Some(&BusinessInfo::default()));
        assert!(receipt.business.is_none());
        assert!(receipt.to_text().contains(FALLBACK_TITLE));
    }

    #[test]
    fn text_includes_business_header() {
        let business = BusinessInfo {
            name: Some("Acme Lettings".into()),
            email: Some("office@acme.test".into()),
            phone: None,
        };
        let text = Receipt::render(&payment(), Some(&business)).to_text();

        assert!(text.contains("Acme Lettings"));
        assert!(text.contains("Email: office@acme.test"));
        assert!(!text.contains("Phone:"));
        assert!(text.contains("Receipt No     RCPT-3F2A9C1E"));
    }

    #[test]
    fn plain_text_layout() {
        let rule = "=".repeat(40);
        let expected = [
            rule.as_str(),
            "Rent Payment Receipt",
            rule.as_str(),
            "Receipt No     RCPT-3F2A9C1E",
            "Date           2024-01-05",
            "Tenant         t1",
            "Unit           un1",
            "Month Covered  2024-01",
            "Amount         1200.00",
            "Method         bank_transfer",
            "Status         PAID",
            "Reference      TRX-881",
            rule.as_str(),
            "Thank you for your payment.",
            "",
        ]
        .join("\n");

        assert_eq!(Receipt::render(&payment(), None).to_text(), expected);
    }

    #[test]
    fn rendering_is_deterministic() {
        let p = payment();
        assert_eq!(Receipt::render(&p, None), Receipt::render(&p, None));
    }
}
