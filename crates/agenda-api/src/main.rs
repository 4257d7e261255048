mod config;
mod error;
mod routes;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use config::AppConfig;
use routes::{app_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    init_tracing()?;

    let config = Arc::new(AppConfig::from_env()?);
    let state = AppState::from_config(Arc::clone(&config))?;
    tracing::info!(
        data_path = %config.data_path.display(),
        max_query_chars = config.max_query_chars,
        sessions = state.session_count(),
        "Agenda dataset ready"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(bind_addr = %config.bind_addr, "agenda-api listening");
    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("agenda-api stopped");
    Ok(())
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env()
        .add_directive("agenda_api=info".parse()?)
        .add_directive("agenda_core=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
