//! The contract shared by every record kind exposed through the API.
//!
//! Services and repositories are written once against [`Resource`] and
//! [`Child`]; each kind only declares its identity, its timestamps, and the
//! whitelist of fields a client may assign.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::payload::Payload;
use crate::time::{self, Timestamp};

/// Keys no client may ever assign, whatever the kind.
pub const READ_ONLY_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

/// A persisted record with identity and timestamps.
pub trait Resource: Serialize + Clone + fmt::Debug + Send + Sync + 'static {
    /// Typed identifier of this kind.
    type Id: Copy + Eq + fmt::Display + FromStr + Send + Sync + 'static;

    /// Kind name, used in `__class__` and error messages (e.g. `"State"`).
    const KIND: &'static str;

    /// Kind-specific keys that are frozen after creation, on top of
    /// [`READ_ONLY_FIELDS`].
    const FROZEN_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> Self::Id;

    fn created_at(&self) -> Timestamp;

    fn updated_at(&self) -> Timestamp;

    /// Overwrite `updated_at`.
    fn touch(&mut self, at: Timestamp);

    /// Assign a single whitelisted field.
    ///
    /// Keys the kind does not declare are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the value does not fit the field.
    fn assign(&mut self, field: &str, value: &Value) -> Result<(), ValidationError>;

    /// Whether a client may assign `field` on update.
    fn is_writable(field: &str) -> bool {
        !READ_ONLY_FIELDS.contains(&field) && !Self::FROZEN_FIELDS.contains(&field)
    }

    /// Apply every writable key of `payload`, then bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Stops at the first field whose value is rejected by [`Resource::assign`].
    fn apply(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        for (field, value) in payload.iter() {
            if Self::is_writable(field) {
                self.assign(field, value)?;
            }
        }
        self.touch(time::now());
        Ok(())
    }
}

/// A record that always belongs to a parent record.
pub trait Child: Resource {
    /// Kind of the owning record.
    type Parent: Resource;

    /// Identifier of the owning record.
    fn parent_id(&self) -> <Self::Parent as Resource>::Id;
}

/// Parse a client-supplied identifier.
///
/// Anything that is not a well-formed identifier cannot name an existing
/// record, so callers treat `None` as "not found".
#[must_use]
pub fn parse_id<R: Resource>(raw: &str) -> Option<R::Id> {
    raw.parse().ok()
}

/// Implements the identity and timestamp accessors of [`Resource`].
macro_rules! resource_identity {
    ($id:ty) => {
        fn id(&self) -> $id {
            self.id
        }

        fn created_at(&self) -> $crate::time::Timestamp {
            self.created_at
        }

        fn updated_at(&self) -> $crate::time::Timestamp {
            self.updated_at
        }

        fn touch(&mut self, at: $crate::time::Timestamp) {
            self.updated_at = at;
        }
    };
}

pub(crate) use resource_identity;
