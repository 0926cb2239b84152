//! Amenity: a feature a place can offer (wifi, pool, …).

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::AmenityId;
use crate::payload::{self, Payload};
use crate::resource::{Resource, resource_identity};
use crate::time::{self, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct Amenity {
    pub id: AmenityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub name: String,
}

impl Amenity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = time::now();
        Self {
            id: AmenityId::new(),
            created_at: now,
            updated_at: now,
            name: name.into(),
        }
    }

    /// Build an amenity from a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] when `name` is absent or empty.
    pub fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        Ok(Self::new(payload.required_str("name")?))
    }
}

impl Resource for Amenity {
    type Id = AmenityId;

    const KIND: &'static str = "Amenity";

    resource_identity!(AmenityId);

    fn assign(&mut self, field: &str, value: &Value) -> Result<(), ValidationError> {
        if field == "name" {
            self.name = payload::required_string("name", value)?;
        }
        Ok(())
    }
}
