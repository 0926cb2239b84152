//! JSON REST handlers shared by every record kind.
//!
//! Each handler is instantiated per kind in [`routes`](super::routes).

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Map;

use hbnb_app::ports::{ChildRepository, Repository, Store};
use hbnb_domain::payload::Payload;
use hbnb_domain::resource::{Child, Resource};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoints.
pub enum ListResponse<R> {
    Ok(Json<Vec<R>>),
}

impl<R: Serialize> IntoResponse for ListResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse<R> {
    Ok(Json<R>),
}

impl<R: Serialize> IntoResponse for GetResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoints.
pub enum CreateResponse<R> {
    Created(Json<R>),
}

impl<R: Serialize> IntoResponse for CreateResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoints.
pub enum DeleteResponse {
    /// `200` with an empty JSON object.
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(Map::new()).into_response(),
        }
    }
}

/// Parse a request body; anything but a JSON object counts as absent.
pub(crate) fn payload(body: &Bytes) -> Option<Payload> {
    Payload::from_slice(body)
}

/// `GET /api/v1/<kind>`
pub async fn list<S, R>(State(state): State<AppState<S>>) -> Result<ListResponse<R>, ApiError>
where
    S: Store + Repository<R>,
    R: Resource,
{
    let records = state.resource_service.list::<R>().await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `GET /api/v1/<parent kind>/{id}/<kind>`
pub async fn list_children<S, R>(
    State(state): State<AppState<S>>,
    Path(parent_id): Path<String>,
) -> Result<ListResponse<R>, ApiError>
where
    S: Store + ChildRepository<R> + Repository<R::Parent>,
    R: Child,
{
    let records = state
        .resource_service
        .list_children::<R>(&parent_id)
        .await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `GET /api/v1/<kind>/{id}`
pub async fn get<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse<R>, ApiError>
where
    S: Store + Repository<R>,
    R: Resource,
{
    let record = state.resource_service.get::<R>(&id).await?;
    Ok(GetResponse::Ok(Json(record)))
}

/// `PUT /api/v1/<kind>/{id}`
pub async fn update<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<GetResponse<R>, ApiError>
where
    S: Store + Repository<R>,
    R: Resource,
{
    let record = state
        .resource_service
        .update::<R>(&id, payload(&body))
        .await?;
    Ok(GetResponse::Ok(Json(record)))
}

/// `DELETE /api/v1/<kind>/{id}`
pub async fn delete<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: Store + Repository<R>,
    R: Resource,
{
    state.resource_service.delete::<R>(&id).await?;
    Ok(DeleteResponse::Ok)
}
