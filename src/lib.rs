use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod loader;
pub mod models;
pub mod routes;
pub mod state;

pub use config::Config;
pub use db::{PlayerStore, StoreError};
pub use error::ApiError;
pub use loader::{PageError, PlayerPage, PlayerPageLoader};
pub use state::AppState;

/// Any origin is accepted. The origin is mirrored back rather than sent as
/// `*` so that credentials can be allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Basketball Stats API - v1.0" }))
        .route("/health", get(routes::health::health_check))
        .route("/api/players", get(routes::players::get_players))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}
