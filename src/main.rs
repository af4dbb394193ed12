use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bfhl_api_server::config::load_config;
use bfhl_api_server::core::error::ApiError;
use bfhl_api_server::features::ai::GeminiClient;
use bfhl_api_server::features::ops::{AnswerProvider, OpsService};
use bfhl_api_server::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let config = Arc::new(load_config()?);
    init_tracing(config.debug);

    let answer_provider: Arc<dyn AnswerProvider> = Arc::new(GeminiClient::new(config.clone())?);
    let ops_service = Arc::new(OpsService::new(config.clone(), answer_provider));
    let app = build_router(AppState::new(config.clone(), ops_service));

    if config.use_https {
        tracing::warn!("USE_HTTPS is set; TLS termination is expected from fronting infrastructure");
    }

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| ApiError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_directive = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_directive.parse().unwrap()))
        .with_target(false)
        .init();
}
