//! Server construction, configuration, and startup wiring.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};

use crate::domain::ports::PasswordHasher;
use crate::inbound::http::auth::{login, register};
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::orders::{place_order, user_orders};
use crate::inbound::http::products::{get_product, list_products};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    self, DbPool, DieselCatalogStore, DieselIdentityStore, DieselOrderLedger, PoolConfig,
};
use crate::outbound::security::BcryptPasswordHasher;

/// Listen port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;
/// Database file used when `DATABASE_URL` is unset.
const DEFAULT_DATABASE_URL: &str = "ecommerce.db";

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    database_url: String,
}

impl ServerConfig {
    /// Construct a configuration from explicit values.
    pub fn new(bind_addr: SocketAddr, database_url: impl Into<String>) -> Self {
        Self {
            bind_addr,
            database_url: database_url.into(),
        }
    }

    /// Resolve configuration from the `PORT` and `DATABASE_URL` environment
    /// variables, falling back to defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .map_or(DEFAULT_PORT, |raw| parse_port(&raw));
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        Self::new(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)), database_url)
    }

    /// Address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Path of the SQLite database file.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

fn parse_port(raw: &str) -> u16 {
    raw.parse().unwrap_or_else(|_| {
        warn!(value = %raw, "invalid PORT value, using default");
        DEFAULT_PORT
    })
}

/// Wire the Diesel adapters and the hashing capability into handler state.
pub fn build_http_state(pool: &DbPool) -> HttpState {
    let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::default());
    HttpState {
        identity: Arc::new(DieselIdentityStore::new(pool.clone(), hasher)),
        catalog: Arc::new(DieselCatalogStore::new(pool.clone())),
        orders: Arc::new(DieselOrderLedger::new(pool.clone())),
    }
}

/// Assemble the actix application: routes, shared state, and the JSON error
/// shape for malformed bodies.
pub fn build_app(
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(health)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(web::scope("/api/auth").service(register).service(login))
        .service(
            web::scope("/api/products")
                .service(list_products)
                .service(get_product),
        )
        .service(
            web::scope("/api/orders")
                .service(place_order)
                .service(user_orders),
        )
        .service(live)
        .service(ready)
}

/// Initialise storage and serve HTTP until shutdown.
///
/// The pool is created and migrated before the server accepts traffic;
/// readiness flips on once both succeed. Dropping the pool on return is the
/// explicit close of the shared storage handle.
///
/// # Errors
/// Returns [`std::io::Error`] when storage initialisation or binding fails.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let pool = DbPool::new(PoolConfig::new(config.database_url())).map_err(std::io::Error::other)?;
    persistence::run_pending_migrations(&pool).map_err(std::io::Error::other)?;
    info!(database = %config.database_url(), "connected to the SQLite database");

    let state = web::Data::new(build_http_state(&pool));
    let health = web::Data::new(HealthState::new());
    let server_health = health.clone();

    let server = HttpServer::new(move || build_app(state.clone(), server_health.clone()))
        .bind(config.bind_addr())?
        .run();

    health.mark_ready();
    info!(addr = %config.bind_addr(), "server listening");
    server.await
}
