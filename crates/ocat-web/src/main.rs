use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ocat_client::AssessmentService;
use ocat_web::config::WebConfig;
use ocat_web::state::WebState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = WebConfig::from_env()?;
    let service = AssessmentService::new(&config.api_url)?;
    let state = WebState::new(service)?;

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, api_url = %config.api_url, "ocat-web listening");

    axum::serve(listener, ocat_web::app(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for shutdown signal: {e}");
            }
        })
        .await?;

    Ok(())
}
