//! Axum router assembly.

use axum::Router;
use axum::http::header::ACCESS_CONTROL_ALLOW_METHODS;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::Store;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api/v1` and answers anything else with a JSON
/// `404`. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem, and permissive CORS.
pub fn build<S: Store>(state: AppState<S>) -> Router {
    // CorsLayer only lists methods on preflight responses.
    let allow_methods = HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS");

    Router::new()
        .nest("/api/v1", crate::api::routes())
        .fallback(crate::error::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            allow_methods,
        ))
        .with_state(state)
}
