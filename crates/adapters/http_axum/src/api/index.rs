//! Service-level endpoints.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use hbnb_app::ports::Store;
use hbnb_domain::stats::Stats;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Status {
    status: &'static str,
}

/// `GET /api/v1/status`
pub async fn status() -> Json<Status> {
    Json(Status { status: "OK" })
}

/// `GET /api/v1/stats`
pub async fn stats<S: Store>(State(state): State<AppState<S>>) -> Result<Json<Stats>, ApiError> {
    let stats = state.resource_service.stats().await?;
    Ok(Json(stats))
}
