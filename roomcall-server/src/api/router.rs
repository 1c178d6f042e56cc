use crate::api::{AppState, generate_token};
use axum::Router;
use axum::routing::post;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const TOKEN_ROUTE: &str = "/generate-token";

/// Token service routes. CORS is wide open: the browser client is served
/// from another origin and there is no caller auth to protect.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(TOKEN_ROUTE, post(generate_token))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
