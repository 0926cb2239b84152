//! State: top-level geographic grouping that owns cities.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::StateId;
use crate::payload::{self, Payload};
use crate::resource::{Resource, resource_identity};
use crate::time::{self, Timestamp};

/// A state, e.g. "California".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct State {
    pub id: StateId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
}

impl State {
    /// Create a state with a fresh id and timestamps.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = time::now();
        Self {
            id: StateId::new(),
            created_at: now,
            updated_at: now,
            name: name.into(),
        }
    }

    /// Build a state from a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] when `name` is absent or empty.
    pub fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        Ok(Self::new(payload.required_str("name")?))
    }
}

impl Resource for State {
    type Id = StateId;

    const KIND: &'static str = "State";

    resource_identity!(StateId);

    fn assign(&mut self, field: &str, value: &Value) -> Result<(), ValidationError> {
        if field == "name" {
            self.name = payload::required_string("name", value)?;
        }
        Ok(())
    }
}
