use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ocat_api::config::ApiConfig;
use ocat_api::state::AppState;
use ocat_storage::sqlite::SqliteAssessmentRepository;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let pool = ocat_storage::client::connect(&config.database_url).await?;
    let repo = SqliteAssessmentRepository::new(pool);
    let state = AppState::new(repo.clone());

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "ocat-api listening");

    axum::serve(listener, ocat_api::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Flush the SQLite connections before exit.
    repo.pool().close().await;
    tracing::info!("ocat-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
    }
}
