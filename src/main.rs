use functions_service::{config::Config, routes::create_router, state::AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::load(".env")?;
    let addr = config.socket_addr()?;

    let app_state = AppState::from_config(&config);
    let router = create_router(app_state);

    let listener = TcpListener::bind(addr).await?;
    info!(
        region = %config.region,
        require_auth = config.require_auth,
        "Functions listening on {}",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Functions stopped.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
