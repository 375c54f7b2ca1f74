//! Backend entry-point: wires storage, handlers, and the HTTP server.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use storefront_backend::server::{run, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    run(ServerConfig::from_env()).await
}
