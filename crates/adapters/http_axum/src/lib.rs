//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1`
//!   (`/states`, `/states/{id}/cities`, `/cities/{id}/places`,
//!   `/places/{id}/reviews`, `/amenities`, `/users`, `/status`, `/stats`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//! - Apply CORS headers and request tracing to every response
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
