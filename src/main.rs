use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use selection_translator::config_manager::utils::{config_search_paths, load_first_config};
use selection_translator::routes;
use selection_translator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration - CONFIG_PATH, then working directory, then next to the executable
    let (config, loaded_path) = load_first_config(&config_search_paths())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.system_config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Loaded configuration from: {}", loaded_path.display());

    // Initialize app state
    let addr = config.system_config.bind_addr()?;
    let app_state = AppState::new(config).await?;

    // Build application
    let app = routes::create_app(app_state);

    // Start server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
