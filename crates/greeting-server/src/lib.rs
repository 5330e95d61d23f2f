mod config;
mod error;
mod routes;

pub use config::Settings;
pub use error::{ApiError, ServerError};
pub use routes::build_router;

use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Filter directives come from `GREETING_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("GREETING_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Binds to the configured address and serves until the process stops.
pub async fn run(settings: Settings) -> Result<(), ServerError> {
    let listener = TcpListener::bind(settings.bind_address).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    serve(listener).await
}

/// Serves the greeting routes on an already bound listener.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    axum::serve(listener, build_router()).await?;
    Ok(())
}
