use std::sync::Arc;

use cinelens_api::api::{create_router, AppState};
use cinelens_api::config::{Config, API_KEY_VAR};
use cinelens_api::services::{providers::GeminiProvider, AnalysisTranslator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cinelens_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    if config.api_key().is_none() {
        tracing::warn!(
            variable = API_KEY_VAR,
            "No Gemini API key configured; analysis requests will fail until it is set"
        );
    }

    let provider = GeminiProvider::from_config(&config);
    tracing::info!(model = provider.model(), "Using Gemini provider");

    let state = AppState::new(AnalysisTranslator::new(Arc::new(provider)));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
