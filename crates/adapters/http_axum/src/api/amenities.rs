//! Amenity handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use hbnb_app::ports::Store;
use hbnb_domain::amenity::Amenity;

use super::generic::{CreateResponse, payload};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/amenities`
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<CreateResponse<Amenity>, ApiError> {
    let amenity = state
        .resource_service
        .create_amenity(payload(&body))
        .await?;
    Ok(CreateResponse::Created(Json(amenity)))
}
