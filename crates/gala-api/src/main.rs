use gala_api::{init_tracing, setup};
use gala_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env in development; ignored when absent.
    dotenvy::dotenv().ok();

    // Load configuration - fails fast when upstream credentials are missing
    let config = Config::from_env()?;

    init_tracing(config.is_production());

    // Initialize the application (upstream client, cache, routes)
    let (_state, router) = setup::initialize_app(config.clone())?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
