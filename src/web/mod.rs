pub mod error;
pub mod handlers;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::components::{CalendarClient, ExtractionClient};

/// Process-wide state shared by all request handlers, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub calendar: CalendarClient,
    pub extractor: ExtractionClient,
}

/// Build the application router: the JSON API plus the static frontend
pub fn router(state: AppState, assets_dir: &str) -> Router {
    Router::new()
        .route("/api/events", get(handlers::list_events))
        .route("/api/generate-schedule", post(handlers::generate_schedule))
        .route(
            "/api/events/{event_id}",
            put(handlers::modify_event).delete(handlers::delete_event),
        )
        .fallback_service(ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
