//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]`, so the HTTP adapter only ever has to map one enum.

/// Top-level error returned by domain logic, services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// The request payload was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record addressed by id does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage gateway failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a client payload is rejected.
///
/// The `Display` output is the exact message sent back in the `error` field
/// of a `400` response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is missing, unparseable, or not a JSON object.
    #[error("Not a JSON")]
    NotAJson,

    /// A required field is absent, `null`, or empty.
    #[error("Missing {0}")]
    Missing(&'static str),

    /// A known field carries a value of the wrong JSON type.
    #[error("Invalid {0}")]
    Invalid(&'static str),
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"State"`).
    pub kind: &'static str,
    /// The identifier as supplied by the caller.
    pub id: String,
}

impl NotFoundError {
    /// Build a not-found error for `kind` addressed by `id`.
    #[must_use]
    pub fn new(kind: &'static str, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}
