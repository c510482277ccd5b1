use crate::components::{CalendarClient, ExtractionClient};
use crate::config::Config;
use crate::error::Error;
use crate::shutdown;
use crate::web::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Initialize the shared service clients and run the HTTP server until a
/// termination signal arrives
pub async fn run_server(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    // Long-lived clients, initialized once and shared by every request
    let state = AppState {
        calendar: CalendarClient::new(Arc::clone(&config)),
        extractor: ExtractionClient::new(Arc::clone(&config)),
    };

    let (port, assets_dir) = {
        let config_read = config.read().await;
        (config_read.port, config_read.assets_dir.clone())
    };

    let app = web::router(state, &assets_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::from)?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(Error::from)?;

    info!("Server shut down");
    Ok(())
}
