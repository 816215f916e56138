use axum::{
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/games", get(handlers::list_games))
        .route("/games/:name", get(handlers::get_game))
        // Ownership
        .route("/users", get(handlers::list_users))
        .route(
            "/users/:username/games",
            get(handlers::get_owned_games).post(handlers::add_owned_game),
        )
        // Recommendations
        .route("/users/:username/profile", get(handlers::get_profile))
        .route(
            "/users/:username/recommendations",
            get(handlers::get_recommendations),
        )
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
