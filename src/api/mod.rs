//! HTTP API server

use std::time::Duration;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the demo frontend is served from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(600));

    let maps = ServeDir::new(state.static_root.join("maps"));
    let waypoints = ServeDir::new(state.static_root.join("waypoints"));

    Router::new()
        .route("/", get(handlers::api_index))
        .route("/health/", get(handlers::health))
        .route("/guide/", get(handlers::guide))
        .route(
            "/simulatedPosition",
            get(handlers::get_position).post(handlers::update_position),
        )
        .route(
            "/simulatedPosition/",
            get(handlers::get_position).post(handlers::update_position),
        )
        .route("/simulatedPosition/gridSquare", get(handlers::grid_square))
        .route("/simulatedPosition/gridSquare/", get(handlers::grid_square))
        .route("/fingerprints", get(handlers::fingerprints))
        .route("/fingerprints/", get(handlers::fingerprints))
        .nest_service("/maps", maps)
        .nest_service("/waypoints", waypoints)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
