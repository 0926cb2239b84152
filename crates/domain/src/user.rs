//! User: an account that owns places and writes reviews.

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::id::UserId;
use crate::payload::{self, Payload};
use crate::resource::{Resource, resource_identity};
use crate::time::{self, Timestamp};

/// A registered user.
///
/// `password` is persisted but never serialized into responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct User {
    pub id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Build a user from a creation payload.
    ///
    /// `email` is checked before `password`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] for the first absent required
    /// field, or [`ValidationError::Invalid`] for a mistyped one.
    pub fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let mut builder = User::builder()
            .email(payload.required_str("email")?)
            .password(payload.required_str("password")?);
        if let Some(first_name) = payload.optional_str("first_name")? {
            builder = builder.first_name(first_name);
        }
        if let Some(last_name) = payload.optional_str("last_name")? {
            builder = builder.last_name(last_name);
        }
        builder.build()
    }
}

impl Resource for User {
    type Id = UserId;

    const KIND: &'static str = "User";
    const FROZEN_FIELDS: &'static [&'static str] = &["email"];

    resource_identity!(UserId);

    fn assign(&mut self, field: &str, value: &Value) -> Result<(), ValidationError> {
        match field {
            "password" => self.password = payload::required_string("password", value)?,
            "first_name" => self.first_name = payload::optional_string("first_name", value)?,
            "last_name" => self.last_name = payload::optional_string("last_name", value)?,
            _ => {}
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Consume the builder and return a [`User`] with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] if `email` or `password` is
    /// missing or empty.
    pub fn build(self) -> Result<User, ValidationError> {
        let email = self
            .email
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::Missing("email"))?;
        let password = self
            .password
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::Missing("password"))?;
        let now = time::now();
        Ok(User {
            id: UserId::new(),
            created_at: now,
            updated_at: now,
            email,
            password,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}
