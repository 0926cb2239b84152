//! State handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use hbnb_app::ports::Store;
use hbnb_domain::state;

use super::generic::{CreateResponse, payload};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/states`
pub async fn create<S: Store>(
    State(app): State<AppState<S>>,
    body: Bytes,
) -> Result<CreateResponse<state::State>, ApiError> {
    let created = app.resource_service.create_state(payload(&body)).await?;
    Ok(CreateResponse::Created(Json(created)))
}
