//! Review handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};

use hbnb_app::ports::Store;
use hbnb_domain::review::Review;

use super::generic::{CreateResponse, payload};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/places/{place_id}/reviews`
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Path(place_id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse<Review>, ApiError> {
    let review = state
        .resource_service
        .create_review(&place_id, payload(&body))
        .await?;
    Ok(CreateResponse::Created(Json(review)))
}
