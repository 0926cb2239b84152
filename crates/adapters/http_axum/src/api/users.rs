//! User handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use hbnb_app::ports::Store;
use hbnb_domain::user::User;

use super::generic::{CreateResponse, payload};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/users`
///
/// The password is stored but never echoed back.
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<CreateResponse<User>, ApiError> {
    let user = state.resource_service.create_user(payload(&body)).await?;
    Ok(CreateResponse::Created(Json(user)))
}
