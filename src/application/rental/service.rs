//! Rental service: application-layer orchestration
//!
//! Every operation waits out the simulated latency first and then runs its
//! store work without further suspension points in between.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::latency::LatencySimulator;
use crate::domain::{
    BillingMonth, DomainError, DomainResult, NewPayment, NewProperty, NewTenant, NewUnit, Payment,
    Property, RentalStore, Stats, Tenant, Unit,
};
use crate::shared::new_id;

pub struct RentalService {
    store: Arc<dyn RentalStore>,
    latency: LatencySimulator,
}

impl RentalService {
    pub fn new(store: Arc<dyn RentalStore>, latency: LatencySimulator) -> Self {
        Self { store, latency }
    }

    // ── Properties ──────────────────────────────────────────────

    pub async fn get_properties(&self) -> DomainResult<Vec<Property>> {
        self.latency.pause().await;
        self.store.list_properties().await
    }

    pub async fn add_property(&self, data: NewProperty) -> DomainResult<Property> {
        self.latency.pause().await;
        let property = self.store.insert_property(data.into_property(new_id())).await?;
        info!(property_id = %property.id, name = %property.name, "Property added");
        Ok(property)
    }

    // ── Units ───────────────────────────────────────────────────

    /// All units, or only those of `property_id`.
    pub async fn get_units(&self, property_id: Option<&str>) -> DomainResult<Vec<Unit>> {
        self.latency.pause().await;
        self.store.list_units(property_id).await
    }

    pub async fn add_unit(&self, data: NewUnit) -> DomainResult<Unit> {
        self.latency.pause().await;
        let unit = self.store.insert_unit(data.into_unit(new_id())).await?;
        info!(unit_id = %unit.id, property_id = %unit.property_id, "Unit added");
        Ok(unit)
    }

    // ── Tenants ─────────────────────────────────────────────────

    pub async fn get_tenants(&self) -> DomainResult<Vec<Tenant>> {
        self.latency.pause().await;
        self.store.list_tenants().await
    }

    /// Append a tenant and mark the referenced unit occupied. An unknown
    /// `unit_id` is accepted as-is.
    pub async fn add_tenant(&self, data: NewTenant) -> DomainResult<Tenant> {
        self.latency.pause().await;
        let (tenant, unit_found) = self.store.insert_tenant(data.into_tenant(new_id())).await?;

        if unit_found {
            info!(tenant_id = %tenant.id, unit_id = %tenant.unit_id, "Tenant added, unit occupied");
        } else {
            warn!(
                tenant_id = %tenant.id,
                unit_id = %tenant.unit_id,
                "Tenant added for unknown unit; no unit status changed"
            );
        }
        Ok(tenant)
    }

    // ── Payments ────────────────────────────────────────────────

    pub async fn get_payments(&self) -> DomainResult<Vec<Payment>> {
        self.latency.pause().await;
        self.store.list_payments().await
    }

    pub async fn get_payment(&self, id: &str) -> DomainResult<Payment> {
        self.latency.pause().await;
        self.store
            .find_payment(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Payment", id))
    }

    /// Store a payment as given: amounts, references and duplicate months
    /// are not checked.
    pub async fn record_payment(&self, data: NewPayment) -> DomainResult<Payment> {
        self.latency.pause().await;
        let payment = self.store.insert_payment(data.into_payment(new_id())).await?;
        info!(
            payment_id = %payment.id,
            tenant_id = %payment.tenant_id,
            amount = %payment.amount,
            month = %payment.month_covered,
            "Payment recorded"
        );
        Ok(payment)
    }

    // ── Dashboard ───────────────────────────────────────────────

    /// Statistics for the current calendar month.
    pub async fn get_stats(&self) -> DomainResult<Stats> {
        self.get_stats_for(BillingMonth::current()).await
    }

    pub async fn get_stats_for(&self, month: BillingMonth) -> DomainResult<Stats> {
        self.latency.pause().await;
        let snapshot = self.store.snapshot().await?;
        Ok(Stats::compute(
            &snapshot.properties,
            &snapshot.units,
            &snapshot.payments,
            month,
        ))
    }
}
