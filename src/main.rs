use basketball_stats_api::{build_router, AppState, Config, PlayerStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting basketball stats server...");

    let config = Config::from_env().expect("Invalid server configuration");

    // Data is loaded before the listener exists, so no request can see a partial store.
    let store = PlayerStore::load_or_empty(&config.players_file);
    let app = build_router(AppState::new(store));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
