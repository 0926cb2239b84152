//! Storage port: the gateway every record kind is persisted through.
//!
//! A single store value implements [`Repository`] once per record kind, and
//! [`ChildRepository`] for kinds that live under a parent. Each mutating call
//! is durable when its future resolves.

use std::future::Future;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::place::Place;
use hbnb_domain::resource::{Child, Resource};
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Identity-keyed persistence for one record kind.
pub trait Repository<R: Resource> {
    /// Persist a new record.
    fn create(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send;

    /// Look up a record by id.
    fn get_by_id(&self, id: R::Id) -> impl Future<Output = Result<Option<R>, HbnbError>> + Send;

    /// Every record of this kind, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send;

    /// Overwrite an existing record.
    fn update(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send;

    /// Remove a record. Owned children go with it.
    fn delete(&self, id: R::Id) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Number of stored records of this kind.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;
}

/// Lookup of records scoped to their parent.
pub trait ChildRepository<R: Child>: Repository<R> {
    /// Records owned by `parent_id`, in insertion order.
    fn find_by_parent(
        &self,
        parent_id: <R::Parent as Resource>::Id,
    ) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send;
}

/// A storage gateway covering all six record kinds.
pub trait Store:
    Repository<State>
    + ChildRepository<City>
    + Repository<Amenity>
    + Repository<User>
    + ChildRepository<Place>
    + ChildRepository<Review>
    + Send
    + Sync
    + 'static
{
}

impl<T> Store for T where
    T: Repository<State>
        + ChildRepository<City>
        + Repository<Amenity>
        + Repository<User>
        + ChildRepository<Place>
        + ChildRepository<Review>
        + Send
        + Sync
        + 'static
{
}
