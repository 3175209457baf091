//! RentDesk server
//!
//! Reads configuration from TOML (`RENTDESK_CONFIG`, or
//! `~/.config/rentdesk/config.toml`), seeds the in-memory store and serves
//! the API plus the front-end build.

use std::path::PathBuf;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rentdesk::application::{IdentityService, RentalService};
use rentdesk::config::LoggingConfig;
use rentdesk::domain::RentalStore;
use rentdesk::shared::ShutdownCoordinator;
use rentdesk::{create_api_router, default_config_path, ApiState, AppConfig, ConfigError, InMemoryStore};

fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Configuration ──────────────────────────────────────────
    let config_path = std::env::var("RENTDESK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let loaded = AppConfig::load(&config_path);
    let app_cfg = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&app_cfg.logging);
    match &loaded {
        Ok(_) => info!(path = %config_path.display(), "Configuration loaded"),
        Err(e @ ConfigError::Read { .. }) => {
            warn!(error = %e, "No readable config file; using defaults")
        }
        Err(e) => error!(error = %e, "Failed to load config; using defaults"),
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting RentDesk");

    // ── Metrics recorder (before any metrics calls) ────────────
    let prometheus_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Prometheus recorder not installed; /metrics disabled");
            None
        }
    };

    // ── Store and services ─────────────────────────────────────
    let store: Arc<dyn RentalStore> = Arc::new(InMemoryStore::new());
    let latency = app_cfg.latency.simulator();
    if latency.is_disabled() {
        info!("Simulated latency disabled");
    }

    let security = &app_cfg.security;
    if security.jwt_secret == rentdesk::infrastructure::crypto::jwt::JwtConfig::default().secret {
        warn!("security.jwt_secret is the built-in default; set a real secret in production");
    }

    let rental = RentalService::new(Arc::clone(&store), latency);
    let identity = IdentityService::new(Arc::clone(&store), security.jwt(), latency)
        .with_passwordless_seed_login(security.allow_passwordless_seed_login)
        .with_hash_cost(security.bcrypt_cost);
    info!(
        expiration_hours = security.jwt_expiration_hours,
        passwordless_seed_login = security.allow_passwordless_seed_login,
        "Identity configured"
    );

    let state = ApiState::new(store, rental, identity, app_cfg.business.info());
    let router = create_api_router(
        state,
        Some(app_cfg.frontend.dist_dir.as_path()),
        prometheus_handle,
    );

    // ── Serve with graceful shutdown ───────────────────────────
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    shutdown.start_signal_listener();

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "HTTP server listening");
    info!("Swagger UI available at http://{}/docs/", addr);

    let signal = shutdown.signal();
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        signal.wait().await;
        info!("HTTP server received shutdown signal");
    });

    let drained = shutdown
        .run_until_drained(async move {
            if let Err(e) = server.await {
                error!(error = %e, "HTTP server error");
            }
        })
        .await;

    if !drained {
        warn!("Exiting with requests still in flight");
    }
    info!("RentDesk shutdown complete");
    Ok(())
}
