//! Router setup and configuration

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::api::handlers;
use crate::api::middleware::admin_auth;
use crate::api::state::AppState;

/// Create the API router
///
/// Reads and member creation are open; edit and delete sit behind the
/// admin bearer-token middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    let admin_routes = Router::new()
        .route(
            "/members/:id",
            put(handlers::update_member).delete(handlers::delete_member),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth));

    Router::new()
        .route("/login", post(handlers::login))
        .route("/stats", get(handlers::get_stats))
        .route("/search", get(handlers::search_members))
        .route(
            "/members",
            get(handlers::list_members).post(handlers::create_member),
        )
        .route("/person/:id", get(handlers::get_person))
        .route("/children/:id", get(handlers::get_children))
        .route("/roots", get(handlers::get_roots))
        .route("/members/:id/photo", post(handlers::upload_photo))
        .route("/health", get(handlers::health_check))
        .merge(admin_routes)
        .with_state(state)
}
