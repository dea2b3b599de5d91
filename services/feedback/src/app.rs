//! Feedback service HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! `/api/*` routes are nested under one router with its own JSON fallback.
//! Every other path is served from the static bundle, falling back to
//! `index.html` so client-side routes such as `/admin/feedback` resolve.
use crate::api;
use crate::contact::ContactNotifier;
use crate::observability;
use crate::store::FeedbackStore;
use axum::Router;
use axum::routing::{get, post};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore + Send + Sync>,
    pub notifier: Arc<dyn ContactNotifier + Send + Sync>,
    pub static_dir: PathBuf,
}

pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(api::system::health))
        .route("/openapi.json", get(api::openapi::openapi_json))
        .route("/sessions", get(api::sessions::list_sessions))
        .route("/contact", post(api::contact::submit_contact))
        .route(
            "/feedback",
            get(api::feedback::list_feedback).post(api::feedback::create_feedback),
        )
        .route("/feedback/summary", get(api::feedback::feedback_summary))
        .route(
            "/feedback/session/:session_number",
            get(api::feedback::list_session_feedback),
        )
        .route("/feedback/:id", get(api::feedback::get_feedback))
        .fallback(api::api_fallback)
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    let index = state.static_dir.join("index.html");
    let static_bundle = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .nest("/api", build_api_router())
        .fallback_service(static_bundle)
        .layer(trace_layer)
        .with_state(state)
}
