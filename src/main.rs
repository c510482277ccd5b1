use promptcal::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting promptcal");

    // Load configuration
    let config = startup::load_config().await?;

    // Run the HTTP server
    startup::run_server(config).await
}
