//! Row mapping for every stored record kind.
//!
//! Each kind declares its table and column list once; [`SqliteStore`]
//! derives all of its SQL from them.
//!
//! [`SqliteStore`]: crate::store::SqliteStore

use std::str::FromStr;

use chrono::SecondsFormat;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::place::Place;
use hbnb_domain::resource::{Child, Resource};
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::time::Timestamp;
use hbnb_domain::user::User;

/// A query with positional arguments still to be bound.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A record kind that maps onto one table.
pub trait Record: Resource + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Column names, `id` first. [`Record::bind`] binds values in this order.
    const COLUMNS: &'static [&'static str];

    /// Bind every column value, in [`Record::COLUMNS`] order.
    fn bind<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    /// Decode a full row.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] when a column is missing or cannot be decoded.
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

/// A record kind whose table references its parent's table.
pub trait ChildRecord: Record + Child {
    /// Column holding the parent id.
    const PARENT_COLUMN: &'static str;
}

fn timestamp(value: Timestamp) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    chrono::DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

fn decode_id<T>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: FromStr<Err = uuid::Error>,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl Record for State {
    const TABLE: &'static str = "states";
    const COLUMNS: &'static [&'static str] = &["id", "created_at", "updated_at", "name"];

    fn bind<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(timestamp(self.created_at))
            .bind(timestamp(self.updated_at))
            .bind(self.name.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            created_at: decode_timestamp(row, "created_at")?,
            updated_at: decode_timestamp(row, "updated_at")?,
            name: row.try_get("name")?,
        })
    }
}

impl Record for City {
    const TABLE: &'static str = "cities";
    const COLUMNS: &'static [&'static str] =
        &["id", "created_at", "updated_at", "state_id", "name"];

    fn bind<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(timestamp(self.created_at))
            .bind(timestamp(self.updated_at))
            .bind(self.state_id.to_string())
            .bind(self.name.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            created_at: decode_timestamp(row, "created_at")?,
            updated_at: decode_timestamp(row, "updated_at")?,
            state_id: decode_id(row, "state_id")?,
            name: row.try_get("name")?,
        })
    }
}

impl ChildRecord for City {
    const PARENT_COLUMN: &'static str = "state_id";
}

impl Record for Amenity {
    const TABLE: &'static str = "amenities";
    const COLUMNS: &'static [&'static str] = &["id", "created_at", "updated_at", "name"];

    fn bind<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(timestamp(self.created_at))
            .bind(timestamp(self.updated_at))
            .bind(self.name.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            created_at: decode_timestamp(row, "created_at")?,
            updated_at: decode_timestamp(row, "updated_at")?,
            name: row.try_get("name")?,
        })
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "email",
        "password",
        "first_name",
        "last_name",
    ];

    fn bind<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(timestamp(self.created_at))
            .bind(timestamp(self.updated_at))
            .bind(self.email.clone())
            .bind(self.password.clone())
            .bind(self.first_name.clone())
            .bind(self.last_name.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            created_at: decode_timestamp(row, "created_at")?,
            updated_at: decode_timestamp(row, "updated_at")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        })
    }
}

impl Record for Place {
    const TABLE: &'static str = "places";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "city_id",
        "user_id",
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
    ];

    fn bind<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(timestamp(self.created_at))
            .bind(timestamp(self.updated_at))
            .bind(self.city_id.to_string())
            .bind(self.user_id.to_string())
            .bind(self.name.clone())
            .bind(self.description.clone())
            .bind(self.number_rooms)
            .bind(self.number_bathrooms)
            .bind(self.max_guest)
            .bind(self.price_by_night)
            .bind(self.latitude)
            .bind(self.longitude)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            created_at: decode_timestamp(row, "created_at")?,
            updated_at: decode_timestamp(row, "updated_at")?,
            city_id: decode_id(row, "city_id")?,
            user_id: decode_id(row, "user_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_rooms: row.try_get("number_rooms")?,
            number_bathrooms: row.try_get("number_bathrooms")?,
            max_guest: row.try_get("max_guest")?,
            price_by_night: row.try_get("price_by_night")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
        })
    }
}

impl ChildRecord for Place {
    const PARENT_COLUMN: &'static str = "city_id";
}

impl Record for Review {
    const TABLE: &'static str = "reviews";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "place_id",
        "user_id",
        "text",
    ];

    fn bind<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(timestamp(self.created_at))
            .bind(timestamp(self.updated_at))
            .bind(self.place_id.to_string())
            .bind(self.user_id.to_string())
            .bind(self.text.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            created_at: decode_timestamp(row, "created_at")?,
            updated_at: decode_timestamp(row, "updated_at")?,
            place_id: decode_id(row, "place_id")?,
            user_id: decode_id(row, "user_id")?,
            text: row.try_get("text")?,
        })
    }
}

impl ChildRecord for Review {
    const PARENT_COLUMN: &'static str = "place_id";
}
