use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use greenlazy_backend::config::Config;
use greenlazy_backend::routes::create_router;
use greenlazy_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("greenlazy_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; chat requests will fail");
    }

    let port = config.port;
    let state = Arc::new(AppState::new(&config));

    let cors = CorsLayer::very_permissive();

    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("GreenLazy backend running at http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
