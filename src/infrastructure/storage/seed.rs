//! Fixed sample data loaded into a fresh store

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    BillingMonth, Payment, PaymentStatus, Property, Tenant, TenantStatus, Unit, UnitStatus, User,
    UserRole,
};

pub(super) struct SeedData {
    pub users: Vec<User>,
    pub properties: Vec<Property>,
    pub units: Vec<Unit>,
    pub tenants: Vec<Tenant>,
    pub payments: Vec<Payment>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn month(y: i32, m: u32) -> BillingMonth {
    BillingMonth::of(date(y, m, 1))
}

fn user(id: &str, name: &str, email: &str, role: UserRole) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
    }
}

fn property(id: &str, name: &str, address: &str, caretaker_id: &str) -> Property {
    Property {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        caretaker_id: Some(caretaker_id.into()),
    }
}

fn unit(id: &str, property_id: &str, number: &str, kind: &str, rent: i64, status: UnitStatus) -> Unit {
    Unit {
        id: id.into(),
        property_id: property_id.into(),
        unit_number: number.into(),
        unit_type: kind.into(),
        rent_amount: Decimal::from(rent),
        status,
    }
}

fn tenant(id: &str, unit_id: &str, name: &str, phone: &str, email: &str, lease_start: NaiveDate) -> Tenant {
    Tenant {
        id: id.into(),
        unit_id: unit_id.into(),
        name: name.into(),
        phone: phone.into(),
        email: Some(email.into()),
        lease_start,
        status: TenantStatus::Active,
    }
}

#[allow(clippy::too_many_arguments)]
fn payment(
    id: &str,
    tenant_id: &str,
    unit_id: &str,
    amount: i64,
    paid_on: NaiveDate,
    status: PaymentStatus,
    method: &str,
    covered: BillingMonth,
) -> Payment {
    Payment {
        id: id.into(),
        tenant_id: tenant_id.into(),
        unit_id: unit_id.into(),
        amount: Decimal::from(amount),
        date: paid_on,
        status,
        method: method.into(),
        month_covered: covered,
        reference: None,
    }
}

pub(super) fn sample() -> SeedData {
    use PaymentStatus::{Paid, Partial};
    use UnitStatus::{Occupied, Vacant};

    SeedData {
        users: vec![
            user("u1", "Admin User", "admin@rentals.com", UserRole::Admin),
            user("u2", "John Caretaker", "caretaker@rentals.com", UserRole::Caretaker),
        ],
        properties: vec![
            property("p1", "Sunset Apartments", "123 Sunset Blvd", "u2"),
            property("p2", "Green Valley Homes", "45 Valley Road", "u2"),
        ],
        units: vec![
            unit("un1", "p1", "A1", "1 Bedroom", 1200, Occupied),
            unit("un2", "p1", "A2", "2 Bedroom", 1500, Occupied),
            unit("un3", "p1", "A3", "Studio", 900, Vacant),
            unit("un4", "p2", "B1", "3 Bedroom", 2000, Occupied),
        ],
        tenants: vec![
            tenant("t1", "un1", "Alice Johnson", "555-0101", "alice@example.com", date(2024, 1, 1)),
            tenant("t2", "un2", "Bob Smith", "555-0102", "bob@example.com", date(2023, 11, 15)),
            tenant("t3", "un4", "Carol White", "555-0103", "carol@example.com", date(2024, 2, 1)),
        ],
        payments: vec![
            payment("pay1", "t1", "un1", 1200, date(2024, 1, 5), Paid, "bank_transfer", month(2024, 1)),
            payment("pay2", "t2", "un2", 1500, date(2024, 1, 3), Paid, "cash", month(2024, 1)),
            payment("pay3", "t3", "un4", 1000, date(2024, 2, 4), Partial, "mobile_money", month(2024, 2)),
            payment("pay4", "t1", "un1", 1200, date(2024, 2, 6), Paid, "bank_transfer", month(2024, 2)),
        ],
    }
}
