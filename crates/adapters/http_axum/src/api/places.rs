//! Place handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};

use hbnb_app::ports::Store;
use hbnb_domain::place::Place;

use super::generic::{CreateResponse, payload};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/cities/{city_id}/places`
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Path(city_id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse<Place>, ApiError> {
    let place = state
        .resource_service
        .create_place(&city_id, payload(&body))
        .await?;
    Ok(CreateResponse::Created(Json(place)))
}
