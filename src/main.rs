use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use microgrid_mock::api::{create_router, AppState};
use microgrid_mock::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::load()?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.service.log_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Configuration loaded successfully");

    let addr = config.bind_address();
    let state = AppState::new(config);
    info!(
        "Loaded {} users, {} enterprises, {} energy baseline rows",
        state.fixtures.users.len(),
        state.fixtures.enterprises.len(),
        state.fixtures.energy_baseline.len()
    );

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Microgrid mock backend listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
