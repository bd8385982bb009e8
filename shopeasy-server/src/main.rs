use std::sync::Arc;

use shopeasy_core::{ShopEasyError, StateStore};
use shopeasy_llm::{OpenRouterClient, OpenRouterConfig};
use shopeasy_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<(), ShopEasyError> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Read configuration once; a missing credential is fatal before any
    // network activity.
    let config = OpenRouterConfig::from_env()?;
    let llm = OpenRouterClient::new(&config)?;

    let app = build_router(AppState {
        store: StateStore::new(),
        llm: Arc::new(llm),
        model: config.model.clone(),
    });

    let bind_addr =
        std::env::var("SHOPEASY_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| ShopEasyError::Custom(format!("failed to bind {bind_addr}: {err}")))?;

    info!(addr = %bind_addr, model = %config.model, "ShopEasy support agent listening");
    axum::serve(listener, app)
        .await
        .map_err(|err| ShopEasyError::Custom(err.to_string()))?;

    Ok(())
}
