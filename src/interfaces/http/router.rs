//! API router with Swagger UI

use std::path::Path;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::frontend;
use super::middleware::auth_middleware;
use super::modules::{
    auth, health, metrics, payments, properties, receipts, request_id, stats, tenants, units,
};
use super::state::ApiState;

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from /api/auth/login or /api/auth/register"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        auth::get_current_user,
        properties::list_properties,
        properties::create_property,
        units::list_units,
        units::create_unit,
        tenants::list_tenants,
        tenants::create_tenant,
        payments::list_payments,
        payments::get_payment,
        payments::record_payment,
        receipts::get_receipt,
        stats::get_stats,
    ),
    components(
        schemas(
            ApiResponse<String>,
            auth::LoginRequest,
            auth::RegisterRequest,
            auth::SessionResponse,
            auth::UserInfo,
            properties::CreatePropertyRequest,
            properties::PropertyResponse,
            units::CreateUnitRequest,
            units::UnitResponse,
            units::UnitStatusDto,
            tenants::CreateTenantRequest,
            tenants::TenantResponse,
            tenants::TenantStatusDto,
            payments::RecordPaymentRequest,
            payments::PaymentResponse,
            payments::PaymentStatusDto,
            receipts::ReceiptResponse,
            receipts::ReceiptLineDto,
            receipts::BusinessHeader,
            stats::StatsResponse,
            health::HealthResponse,
            health::RecordCounts,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Authentication", description = "Login, registration and the current session"),
        (name = "Properties", description = "Rental properties"),
        (name = "Units", description = "Lettable units within properties"),
        (name = "Tenants", description = "Tenants and their unit assignments"),
        (name = "Payments", description = "Rent payments and receipts"),
        (name = "Dashboard", description = "Occupancy and collection statistics"),
    ),
    info(
        title = "RentDesk API",
        version = "1.0.0",
        description = "REST API for managing rental properties, tenants and rent collection"
    )
)]
pub struct ApiDoc;

/// Build the full HTTP surface.
///
/// `frontend_dir` enables SPA hosting when it contains a build; `metrics`
/// mounts `/metrics` when a Prometheus recorder is installed.
pub fn create_api_router(
    state: ApiState,
    frontend_dir: Option<&Path>,
    metrics: Option<PrometheusHandle>,
) -> Router {
    let guard = middleware::from_fn_with_state(state.clone(), auth_middleware);

    // `route_layer` only covers the routes above it, so login and register
    // stay public.
    let auth_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .route_layer(guard.clone())
        .route("/login", post(auth::login))
        .route("/register", post(auth::register));

    let data_routes = Router::new()
        .route(
            "/properties",
            get(properties::list_properties).post(properties::create_property),
        )
        .route("/units", get(units::list_units).post(units::create_unit))
        .route(
            "/tenants",
            get(tenants::list_tenants).post(tenants::create_tenant),
        )
        .route(
            "/payments",
            get(payments::list_payments).post(payments::record_payment),
        )
        .route("/payments/{id}", get(payments::get_payment))
        .route("/payments/{id}/receipt", get(receipts::get_receipt))
        .route("/stats", get(stats::get_stats))
        .route_layer(guard);

    let api = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/auth", auth_routes)
        .nest("/api", data_routes)
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let spa = frontend_dir.and_then(frontend::spa_service);

    let mut router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(api);

    if let Some(handle) = metrics {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    router
        .fallback(move |request: Request<Body>| frontend::fallback(spa.clone(), request))
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
