//! Review: a user's comment on a [`Place`].

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::{PlaceId, ReviewId, UserId};
use crate::payload::{self, Payload};
use crate::place::Place;
use crate::resource::{Child, Resource, resource_identity};
use crate::time::{self, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct Review {
    pub id: ReviewId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: String,
}

impl Review {
    #[must_use]
    pub fn new(place_id: PlaceId, user_id: UserId, text: impl Into<String>) -> Self {
        let now = time::now();
        Self {
            id: ReviewId::new(),
            created_at: now,
            updated_at: now,
            place_id,
            user_id,
            text: text.into(),
        }
    }

    /// Build a review from a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] when `text` is absent or empty.
    pub fn from_payload(
        place_id: PlaceId,
        user_id: UserId,
        payload: &Payload,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(place_id, user_id, payload.required_str("text")?))
    }
}

impl Resource for Review {
    type Id = ReviewId;

    const KIND: &'static str = "Review";
    const FROZEN_FIELDS: &'static [&'static str] = &["place_id", "user_id"];

    resource_identity!(ReviewId);

    fn assign(&mut self, field: &str, value: &Value) -> Result<(), ValidationError> {
        if field == "text" {
            self.text = payload::required_string("text", value)?;
        }
        Ok(())
    }
}

impl Child for Review {
    type Parent = Place;

    fn parent_id(&self) -> PlaceId {
        self.place_id
    }
}
