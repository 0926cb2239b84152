//! City handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};

use hbnb_app::ports::Store;
use hbnb_domain::city::City;

use super::generic::{CreateResponse, payload};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/states/{state_id}/cities`
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Path(state_id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse<City>, ApiError> {
    let city = state
        .resource_service
        .create_city(&state_id, payload(&body))
        .await?;
    Ok(CreateResponse::Created(Json(city)))
}
