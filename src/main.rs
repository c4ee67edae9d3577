mod config;
mod error;
mod routes;
mod state;
mod stateless_llm;
mod translate;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "translatorai_backend=debug,tower_http=debug".into()),
        )
        .init();

    // .env is optional; deployments may set OPENAI_API_KEY directly
    let _ = dotenvy::dotenv();

    // Load configuration - try multiple paths
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let config_path = config_paths
        .iter()
        .find(|path| std::path::Path::new(path).exists())
        .ok_or_else(|| {
            anyhow::anyhow!("Could not find config file. Tried: {:?}", config_paths)
        })?;

    let config = Config::load(config_path)?;
    info!("Loaded configuration from: {}", config_path);

    // Initialize app state; fails fast on a missing credential or an
    // unsupported provider
    let app_state = AppState::new(config.clone())?;

    // Build application
    let app = Router::new()
        .merge(routes::create_routes(app_state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        config.system_config.host, config.system_config.port
    )
    .parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
