use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth::ServerState;

pub mod auth;
pub mod bookmarks;
pub mod users;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public auth/health routes plus the
/// bearer-token-protected user and bookmark routes.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    // Public routes (health + credential endpoints)
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/signin", post(auth::signin));

    // Protected routes: the token check runs before any handler logic
    let protected = Router::new()
        .route("/users/me", get(users::me))
        .route("/users", patch(users::edit))
        .route("/bookmarks", post(bookmarks::create).get(bookmarks::list))
        .route(
            "/bookmarks/:id",
            get(bookmarks::get_one).patch(bookmarks::edit).delete(bookmarks::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), crate::auth::require_bearer_token));

    // Compose
    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
