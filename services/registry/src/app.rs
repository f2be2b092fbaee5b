//! Registry HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! Cross-origin requests are accepted from any origin so browser clients
//! served from elsewhere can call the API directly.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::observability;
use crate::store::RegistryStore;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub store: Arc<dyn RegistryStore + Send + Sync>,
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
            let _ = span.set_parent(parent);
            span
        });
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/system/info", get(api::system::system_info))
        .route("/api/system/health", get(api::system::system_health))
        .route(
            "/api/animais",
            get(api::animals::list_animals).post(api::animals::create_animal),
        )
        .route(
            "/api/animais/:id",
            get(api::animals::get_animal)
                .put(api::animals::update_animal)
                .delete(api::animals::delete_animal),
        )
        .route(
            "/api/cuidados",
            get(api::cares::list_cares).post(api::cares::create_care),
        )
        .route(
            "/api/cuidados/:id",
            get(api::cares::get_care)
                .put(api::cares::update_care)
                .delete(api::cares::delete_care),
        )
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(trace_layer)
        .with_state(state)
}
