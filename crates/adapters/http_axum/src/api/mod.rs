//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod cities;
#[allow(clippy::missing_errors_doc)]
pub mod generic;
#[allow(clippy::missing_errors_doc)]
pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod states;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use hbnb_app::ports::Store;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<S>))
        // States
        .route(
            "/states",
            get(generic::list::<S, State>).post(states::create::<S>),
        )
        .route(
            "/states/{id}",
            get(generic::get::<S, State>)
                .put(generic::update::<S, State>)
                .delete(generic::delete::<S, State>),
        )
        // Cities
        .route(
            "/states/{id}/cities",
            get(generic::list_children::<S, City>).post(cities::create::<S>),
        )
        .route(
            "/cities/{id}",
            get(generic::get::<S, City>)
                .put(generic::update::<S, City>)
                .delete(generic::delete::<S, City>),
        )
        // Amenities
        .route(
            "/amenities",
            get(generic::list::<S, Amenity>).post(amenities::create::<S>),
        )
        .route(
            "/amenities/{id}",
            get(generic::get::<S, Amenity>)
                .put(generic::update::<S, Amenity>)
                .delete(generic::delete::<S, Amenity>),
        )
        // Users
        .route(
            "/users",
            get(generic::list::<S, User>).post(users::create::<S>),
        )
        .route(
            "/users/{id}",
            get(generic::get::<S, User>)
                .put(generic::update::<S, User>)
                .delete(generic::delete::<S, User>),
        )
        // Places
        .route(
            "/cities/{id}/places",
            get(generic::list_children::<S, Place>).post(places::create::<S>),
        )
        .route(
            "/places/{id}",
            get(generic::get::<S, Place>)
                .put(generic::update::<S, Place>)
                .delete(generic::delete::<S, Place>),
        )
        // Reviews
        .route(
            "/places/{id}/reviews",
            get(generic::list_children::<S, Review>).post(reviews::create::<S>),
        )
        .route(
            "/reviews/{id}",
            get(generic::get::<S, Review>)
                .put(generic::update::<S, Review>)
                .delete(generic::delete::<S, Review>),
        )
}
