//! Tenant domain entity

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TenantStatus {
    #[default]
    Active,
    Inactive,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// A person renting a unit. The current tenant of a unit is whichever
/// tenant references it; nothing keeps that unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: String,
    pub unit_id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub lease_start: NaiveDate,
    pub status: TenantStatus,
}

#[derive(Debug, Clone)]
pub struct NewTenant {
    pub unit_id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub lease_start: NaiveDate,
    pub status: Option<TenantStatus>,
}

impl NewTenant {
    pub fn into_tenant(self, id: String) -> Tenant {
        Tenant {
            id,
            unit_id: self.unit_id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            lease_start: self.lease_start,
            status: self.status.unwrap_or_default(),
        }
    }
}
