//! City: belongs to a [`State`](crate::state::State) and owns places.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::{CityId, StateId};
use crate::payload::{self, Payload};
use crate::resource::{Child, Resource, resource_identity};
use crate::state::State;
use crate::time::{self, Timestamp};

/// A city inside a state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct City {
    pub id: CityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub state_id: StateId,
    pub name: String,
}

impl City {
    /// Create a city with a fresh id and timestamps.
    #[must_use]
    pub fn new(state_id: StateId, name: impl Into<String>) -> Self {
        let now = time::now();
        Self {
            id: CityId::new(),
            created_at: now,
            updated_at: now,
            state_id,
            name: name.into(),
        }
    }

    /// Build a city owned by `state_id` from a creation payload.
    ///
    /// Any `state_id` in the payload is ignored; the owner always comes from
    /// the request path.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] when `name` is absent or empty.
    pub fn from_payload(state_id: StateId, payload: &Payload) -> Result<Self, ValidationError> {
        Ok(Self::new(state_id, payload.required_str("name")?))
    }
}

impl Resource for City {
    type Id = CityId;

    const KIND: &'static str = "City";
    const FROZEN_FIELDS: &'static [&'static str] = &["state_id"];

    resource_identity!(CityId);

    fn assign(&mut self, field: &str, value: &Value) -> Result<(), ValidationError> {
        if field == "name" {
            self.name = payload::required_string("name", value)?;
        }
        Ok(())
    }
}

impl Child for City {
    type Parent = State;

    fn parent_id(&self) -> StateId {
        self.state_id
    }
}
