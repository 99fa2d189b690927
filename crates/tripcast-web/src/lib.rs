//! HTTP surface for the tripcast destination catalog.
//!
//! Thin layer over [`DestinationService`]: handlers parse and coerce wire
//! input, delegate, and map every service error to exactly one status code
//! with a `{"error": message}` body.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use tripcast_core::DestinationService;

mod error;
mod handlers;

pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DestinationService>,
}

impl AppState {
    pub fn new(service: Arc<DestinationService>) -> Self {
        Self { service }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/destinations",
            post(handlers::create_destination).patch(handlers::update_destination_temperature),
        )
        .route("/destinations/:name", delete(handlers::delete_destination))
        .route("/get_destination", get(handlers::get_destination))
        .route("/fetch_destinations", get(handlers::fetch_destinations))
        .route("/get_verdict", get(handlers::get_verdict))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
