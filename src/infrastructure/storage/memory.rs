//! In-memory storage implementation

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::seed;
use crate::domain::{
    DomainError, DomainResult, Payment, Property, RentalStore, StoreCounts, StoreSnapshot, Tenant, Unit, User,
    UserRole,
};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    properties: Vec<Property>,
    units: Vec<Unit>,
    tenants: Vec<Tenant>,
    payments: Vec<Payment>,
}

/// Process-lifetime store. Everything is lost on restart.
///
/// All five collections sit behind one lock so that a tenant insert and the
/// matching unit status change are observed together.
pub struct InMemoryStore {
    data: RwLock<Collections>,
    /// bcrypt hashes keyed by user id; seeded users have none
    credentials: DashMap<String, String>,
}

impl InMemoryStore {
    /// Store preloaded with the sample portfolio.
    pub fn new() -> Self {
        let seed = seed::sample();
        Self {
            data: RwLock::new(Collections {
                users: seed.users,
                properties: seed.properties,
                units: seed.units,
                tenants: seed.tenants,
                payments: seed.payments,
            }),
            credentials: DashMap::new(),
        }
    }

    /// Store with no records at all.
    pub fn empty() -> Self {
        Self {
            data: RwLock::new(Collections::default()),
            credentials: DashMap::new(),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalStore for InMemoryStore {
    async fn find_user(&self, id: &str) -> DomainResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_login(&self, email: &str, role: UserRole) -> DomainResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data
            .users
            .iter()
            .find(|u| u.email == email && u.role == role)
            .cloned())
    }

    async fn email_taken(&self, email: &str) -> DomainResult<bool> {
        let data = self.data.read().await;
        Ok(data.users.iter().any(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn insert_user(&self, user: User, password_hash: Option<String>) -> DomainResult<User> {
        let mut data = self.data.write().await;
        if data.users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(DomainError::Conflict("Email already registered".into()));
        }
        if let Some(hash) = password_hash {
            self.credentials.insert(user.id.clone(), hash);
        }
        data.users.push(user.clone());
        Ok(user)
    }

    async fn password_hash(&self, user_id: &str) -> DomainResult<Option<String>> {
        Ok(self.credentials.get(user_id).map(|h| h.value().clone()))
    }

    async fn list_properties(&self) -> DomainResult<Vec<Property>> {
        Ok(self.data.read().await.properties.clone())
    }

    async fn insert_property(&self, property: Property) -> DomainResult<Property> {
        self.data.write().await.properties.push(property.clone());
        Ok(property)
    }

    async fn list_units(&self, property_id: Option<&str>) -> DomainResult<Vec<Unit>> {
        let data = self.data.read().await;
        Ok(match property_id {
            Some(pid) => data
                .units
                .iter()
                .filter(|u| u.property_id == pid)
                .cloned()
                .collect(),
            None => data.units.clone(),
        })
    }

    async fn insert_unit(&self, unit: Unit) -> DomainResult<Unit> {
        self.data.write().await.units.push(unit.clone());
        Ok(unit)
    }

    async fn list_tenants(&self) -> DomainResult<Vec<Tenant>> {
        Ok(self.data.read().await.tenants.clone())
    }

    async fn insert_tenant(&self, tenant: Tenant) -> DomainResult<(Tenant, bool)> {
        let mut data = self.data.write().await;
        data.tenants.push(tenant.clone());

        let unit_found = match data.units.iter_mut().find(|u| u.id == tenant.unit_id) {
            Some(unit) => {
                unit.mark_occupied();
                debug!(unit_id = %unit.id, "Unit marked occupied");
                true
            }
            None => false,
        };

        Ok((tenant, unit_found))
    }

    async fn list_payments(&self) -> DomainResult<Vec<Payment>> {
        Ok(self.data.read().await.payments.clone())
    }

    async fn find_payment(&self, id: &str) -> DomainResult<Option<Payment>> {
        let data = self.data.read().await;
        Ok(data.payments.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_payment(&self, payment: Payment) -> DomainResult<Payment> {
        self.data.write().await.payments.push(payment.clone());
        Ok(payment)
    }

    async fn snapshot(&self) -> DomainResult<StoreSnapshot> {
        let data = self.data.read().await;
        Ok(StoreSnapshot {
            properties: data.properties.clone(),
            units: data.units.clone(),
            payments: data.payments.clone(),
        })
    }

    async fn counts(&self) -> DomainResult<StoreCounts> {
        let data = self.data.read().await;
        Ok(StoreCounts {
            users: data.users.len(),
            properties: data.properties.len(),
            units: data.units.len(),
            tenants: data.tenants.len(),
            payments: data.payments.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{NewTenant, UnitStatus};

    fn tenant_for(unit_id: &str) -> Tenant {
        NewTenant {
            unit_id: unit_id.into(),
            name: "Dana Lee".into(),
            phone: "555-0199".into(),
            email: None,
            lease_start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: None,
        }
        .into_tenant("t-new".into())
    }

    #[tokio::test]
    async fn insert_user_rejects_taken_email_in_any_case() {
        let store = InMemoryStore::new();
        let user = User {
            id: "u-new".into(),
            name: "Second Admin".into(),
            email: "ADMIN@rentals.com".into(),
            role: UserRole::Caretaker,
        };

        let err = store
            .insert_user(user, Some("hash".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(store.counts().await.unwrap().users, 2);
        assert!(store.password_hash("u-new").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seed_has_expected_shape() {
        let store = InMemoryStore::new();
        let counts = store.counts().await.unwrap();

        assert_eq!(
            counts,
            StoreCounts {
                users: 2,
                properties: 2,
                units: 4,
                tenants: 3,
                payments: 4,
            }
        );
    }

    #[tokio::test]
    async fn units_filter_by_property() {
        let store = InMemoryStore::new();

        let p1 = store.list_units(Some("p1")).await.unwrap();
        let ids: Vec<&str> = p1.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["un1", "un2", "un3"]);

        assert!(store.list_units(Some("nope")).await.unwrap().is_empty());
        assert_eq!(store.list_units(None).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn tenant_insert_occupies_unit() {
        let store = InMemoryStore::new();

        let (_, found) = store.insert_tenant(tenant_for("un3")).await.unwrap();
        assert!(found);

        let units = store.list_units(None).await.unwrap();
        let un3 = units.iter().find(|u| u.id == "un3").unwrap();
        assert_eq!(un3.status, UnitStatus::Occupied);
    }

    #[tokio::test]
    async fn tenant_insert_with_unknown_unit_changes_nothing() {
        let store = InMemoryStore::new();
        let before = store.list_units(None).await.unwrap();

        let (tenant, found) = store.insert_tenant(tenant_for("ghost")).await.unwrap();
        assert!(!found);
        assert_eq!(tenant.unit_id, "ghost");

        assert_eq!(store.list_units(None).await.unwrap(), before);
        assert_eq!(store.list_tenants().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn login_lookup_requires_email_and_role() {
        let store = InMemoryStore::new();

        assert!(store
            .find_user_by_login("admin@rentals.com", UserRole::Admin)
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_user_by_login("admin@rentals.com", UserRole::Caretaker)
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_user_by_login("ADMIN@rentals.com", UserRole::Admin)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn credentials_are_kept_per_user() {
        let store = InMemoryStore::empty();
        let user = User {
            id: "u9".into(),
            name: "Eve".into(),
            email: "eve@example.com".into(),
            role: UserRole::Caretaker,
        };
        store.insert_user(user, Some("hash".into())).await.unwrap();

        assert_eq!(store.password_hash("u9").await.unwrap().as_deref(), Some("hash"));
        assert!(store.password_hash("u1").await.unwrap().is_none());
        assert!(store.email_taken("EVE@example.com").await.unwrap());
    }
}
