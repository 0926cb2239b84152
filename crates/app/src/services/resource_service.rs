//! Resource service: list/get/create/update/delete for every record kind.
//!
//! Lookups, updates and deletes are written once over [`Resource`]; creation
//! is spelled out per kind because each one checks its parent, its body and
//! its references in a different, externally visible order.

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::{HbnbError, NotFoundError, ValidationError};
use hbnb_domain::payload::Payload;
use hbnb_domain::place::Place;
use hbnb_domain::resource::{self, Child, Resource};
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::stats::Stats;
use hbnb_domain::user::User;

use crate::ports::{ChildRepository, Repository, Store};

/// Application service for record CRUD operations.
///
/// Path identifiers are taken as raw strings: anything that does not parse
/// as an identifier is reported as [`HbnbError::NotFound`], exactly like a
/// well-formed id with no matching record.
pub struct ResourceService<S> {
    store: S,
}

impl<S> ResourceService<S>
where
    S: Send + Sync + 'static,
{
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every record of kind `R`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list<R>(&self) -> Result<Vec<R>, HbnbError>
    where
        R: Resource,
        S: Repository<R>,
    {
        <S as Repository<R>>::get_all(&self.store).await
    }

    /// List the records of kind `R` owned by `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the parent does not exist, or a
    /// storage error.
    pub async fn list_children<R>(&self, parent_id: &str) -> Result<Vec<R>, HbnbError>
    where
        R: Child,
        S: ChildRepository<R> + Repository<R::Parent>,
    {
        let parent = self.find::<R::Parent>(parent_id).await?;
        <S as ChildRepository<R>>::find_by_parent(&self.store, parent.id()).await
    }

    /// Look up a record of kind `R` by its raw id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no such record exists, or a
    /// storage error.
    pub async fn get<R>(&self, id: &str) -> Result<R, HbnbError>
    where
        R: Resource,
        S: Repository<R>,
    {
        self.find(id).await
    }

    /// Apply the writable fields of `body` to an existing record.
    ///
    /// The record is looked up before the body is examined.
    ///
    /// # Errors
    ///
    /// [`HbnbError::NotFound`] when the record does not exist,
    /// [`HbnbError::Validation`] when `body` is absent or a field value is
    /// rejected, or a storage error.
    pub async fn update<R>(&self, id: &str, body: Option<Payload>) -> Result<R, HbnbError>
    where
        R: Resource,
        S: Repository<R>,
    {
        let mut record = self.find::<R>(id).await?;
        let payload = Payload::require(body)?;
        record.apply(&payload)?;
        let saved = <S as Repository<R>>::update(&self.store, record).await?;
        tracing::debug!(kind = R::KIND, id = %saved.id(), "record updated");
        Ok(saved)
    }

    /// Delete a record of kind `R`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no such record exists, or a
    /// storage error.
    pub async fn delete<R>(&self, id: &str) -> Result<(), HbnbError>
    where
        R: Resource,
        S: Repository<R>,
    {
        let record = self.find::<R>(id).await?;
        <S as Repository<R>>::delete(&self.store, record.id()).await?;
        tracing::debug!(kind = R::KIND, id = %record.id(), "record deleted");
        Ok(())
    }

    /// Create a state. Checks: body, `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for the first failed check, or a
    /// storage error.
    #[tracing::instrument(skip_all)]
    pub async fn create_state(&self, body: Option<Payload>) -> Result<State, HbnbError>
    where
        S: Repository<State>,
    {
        let payload = Payload::require(body)?;
        let state = State::from_payload(&payload)?;
        self.insert(state).await
    }

    /// Create a city under `state_id`. Checks: parent state, body, `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist,
    /// [`HbnbError::Validation`] for the first failed body check, or a
    /// storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_city(
        &self,
        state_id: &str,
        body: Option<Payload>,
    ) -> Result<City, HbnbError>
    where
        S: Repository<State> + Repository<City>,
    {
        let state = self.find::<State>(state_id).await?;
        let payload = Payload::require(body)?;
        let city = City::from_payload(state.id, &payload)?;
        self.insert(city).await
    }

    /// Create an amenity. Checks: body, `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for the first failed check, or a
    /// storage error.
    #[tracing::instrument(skip_all)]
    pub async fn create_amenity(&self, body: Option<Payload>) -> Result<Amenity, HbnbError>
    where
        S: Repository<Amenity>,
    {
        let payload = Payload::require(body)?;
        let amenity = Amenity::from_payload(&payload)?;
        self.insert(amenity).await
    }

    /// Create a user. Checks: body, `email`, `password`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for the first failed check, or a
    /// storage error.
    #[tracing::instrument(skip_all)]
    pub async fn create_user(&self, body: Option<Payload>) -> Result<User, HbnbError>
    where
        S: Repository<User>,
    {
        let payload = Payload::require(body)?;
        let user = User::from_payload(&payload)?;
        self.insert(user).await
    }

    /// Create a place under `city_id`.
    ///
    /// Checks: parent city, body, `user_id` present, user exists, `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city or the user does not
    /// exist, [`HbnbError::Validation`] for the first failed body check, or a
    /// storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_place(
        &self,
        city_id: &str,
        body: Option<Payload>,
    ) -> Result<Place, HbnbError>
    where
        S: Repository<City> + Repository<User> + Repository<Place>,
    {
        let city = self.find::<City>(city_id).await?;
        let payload = Payload::require(body)?;
        let user = self.reference::<User>(&payload, "user_id").await?;
        let place = Place::from_payload(city.id, user.id, &payload)?;
        self.insert(place).await
    }

    /// Create a review under `place_id`.
    ///
    /// Checks: parent place, body, `user_id` present, user exists, `text`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place or the user does not
    /// exist, [`HbnbError::Validation`] for the first failed body check, or a
    /// storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_review(
        &self,
        place_id: &str,
        body: Option<Payload>,
    ) -> Result<Review, HbnbError>
    where
        S: Repository<Place> + Repository<User> + Repository<Review>,
    {
        let place = self.find::<Place>(place_id).await?;
        let payload = Payload::require(body)?;
        let user = self.reference::<User>(&payload, "user_id").await?;
        let review = Review::from_payload(place.id, user.id, &payload)?;
        self.insert(review).await
    }

    /// Count the stored records of every kind.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn stats(&self) -> Result<Stats, HbnbError>
    where
        S: Store,
    {
        Ok(Stats {
            amenities: <S as Repository<Amenity>>::count(&self.store).await?,
            cities: <S as Repository<City>>::count(&self.store).await?,
            places: <S as Repository<Place>>::count(&self.store).await?,
            reviews: <S as Repository<Review>>::count(&self.store).await?,
            states: <S as Repository<State>>::count(&self.store).await?,
            users: <S as Repository<User>>::count(&self.store).await?,
        })
    }

    async fn find<R>(&self, raw_id: &str) -> Result<R, HbnbError>
    where
        R: Resource,
        S: Repository<R>,
    {
        let not_found = || HbnbError::from(NotFoundError::new(R::KIND, raw_id));
        let id = resource::parse_id::<R>(raw_id).ok_or_else(not_found)?;
        <S as Repository<R>>::get_by_id(&self.store, id)
            .await?
            .ok_or_else(not_found)
    }

    /// Resolve a required reference field of `payload` to an existing record.
    ///
    /// Only an absent key is a validation error. Any present value that does
    /// not name an existing record, including `null`, `""` and non-strings,
    /// is reported as not found.
    async fn reference<R>(&self, payload: &Payload, field: &'static str) -> Result<R, HbnbError>
    where
        R: Resource,
        S: Repository<R>,
    {
        let value = payload.get(field).ok_or(ValidationError::Missing(field))?;
        let raw_id = value.as_str().unwrap_or_default();
        self.find::<R>(raw_id).await
    }

    async fn insert<R>(&self, record: R) -> Result<R, HbnbError>
    where
        R: Resource,
        S: Repository<R>,
    {
        let created = <S as Repository<R>>::create(&self.store, record).await?;
        tracing::debug!(kind = R::KIND, id = %created.id(), "record created");
        Ok(created)
    }
}
