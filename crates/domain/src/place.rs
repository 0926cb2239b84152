//! Place: a rental listing inside a [`City`], owned by a [`User`](crate::user::User).

use serde::Serialize;
use serde_json::Value;

use crate::city::City;
use crate::error::ValidationError;
use crate::id::{CityId, PlaceId, UserId};
use crate::payload::{self, Payload};
use crate::resource::{Child, Resource, resource_identity};
use crate::time::{self, Timestamp};

/// A place offered for rent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct Place {
    pub id: PlaceId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder(city_id: CityId, user_id: UserId) -> PlaceBuilder {
        PlaceBuilder {
            city_id,
            user_id,
            name: None,
            description: None,
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
        }
    }

    /// Build a place from a creation payload.
    ///
    /// Owner and city come from the caller, never from the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] when `name` is absent or empty,
    /// or [`ValidationError::Invalid`] for a mistyped optional field.
    pub fn from_payload(
        city_id: CityId,
        user_id: UserId,
        payload: &Payload,
    ) -> Result<Self, ValidationError> {
        let mut builder = Place::builder(city_id, user_id)
            .name(payload.required_str("name")?)
            .number_rooms(payload.count_or_zero("number_rooms")?)
            .number_bathrooms(payload.count_or_zero("number_bathrooms")?)
            .max_guest(payload.count_or_zero("max_guest")?)
            .price_by_night(payload.count_or_zero("price_by_night")?);
        if let Some(description) = payload.optional_str("description")? {
            builder = builder.description(description);
        }
        if let Some(latitude) = payload.optional_f64("latitude")? {
            builder = builder.latitude(latitude);
        }
        if let Some(longitude) = payload.optional_f64("longitude")? {
            builder = builder.longitude(longitude);
        }
        builder.build()
    }
}

impl Resource for Place {
    type Id = PlaceId;

    const KIND: &'static str = "Place";
    const FROZEN_FIELDS: &'static [&'static str] = &["city_id", "user_id"];

    resource_identity!(PlaceId);

    fn assign(&mut self, field: &str, value: &Value) -> Result<(), ValidationError> {
        match field {
            "name" => self.name = payload::required_string("name", value)?,
            "description" => self.description = payload::optional_string("description", value)?,
            "number_rooms" => self.number_rooms = payload::count("number_rooms", value)?,
            "number_bathrooms" => {
                self.number_bathrooms = payload::count("number_bathrooms", value)?;
            }
            "max_guest" => self.max_guest = payload::count("max_guest", value)?,
            "price_by_night" => self.price_by_night = payload::count("price_by_night", value)?,
            "latitude" => self.latitude = payload::optional_number("latitude", value)?,
            "longitude" => self.longitude = payload::optional_number("longitude", value)?,
            _ => {}
        }
        Ok(())
    }
}

impl Child for Place {
    type Parent = City;

    fn parent_id(&self) -> CityId {
        self.city_id
    }
}

/// Step-by-step builder for [`Place`].
#[derive(Debug)]
pub struct PlaceBuilder {
    city_id: CityId,
    user_id: UserId,
    name: Option<String>,
    description: Option<String>,
    number_rooms: u32,
    number_bathrooms: u32,
    max_guest: u32,
    price_by_night: u32,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn number_rooms(mut self, value: u32) -> Self {
        self.number_rooms = value;
        self
    }

    #[must_use]
    pub fn number_bathrooms(mut self, value: u32) -> Self {
        self.number_bathrooms = value;
        self
    }

    #[must_use]
    pub fn max_guest(mut self, value: u32) -> Self {
        self.max_guest = value;
        self
    }

    #[must_use]
    pub fn price_by_night(mut self, value: u32) -> Self {
        self.price_by_night = value;
        self
    }

    #[must_use]
    pub fn latitude(mut self, value: f64) -> Self {
        self.latitude = Some(value);
        self
    }

    #[must_use]
    pub fn longitude(mut self, value: f64) -> Self {
        self.longitude = Some(value);
        self
    }

    /// Consume the builder and return a [`Place`] with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Missing`] if `name` is missing or empty.
    pub fn build(self) -> Result<Place, ValidationError> {
        let name = self
            .name
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::Missing("name"))?;
        let now = time::now();
        Ok(Place {
            id: PlaceId::new(),
            created_at: now,
            updated_at: now,
            city_id: self.city_id,
            user_id: self.user_id,
            name,
            description: self.description,
            number_rooms: self.number_rooms,
            number_bathrooms: self.number_bathrooms,
            max_guest: self.max_guest,
            price_by_night: self.price_by_night,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}
