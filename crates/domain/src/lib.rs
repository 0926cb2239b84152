//! # hbnb-domain
//!
//! Pure domain model for the hbnb rental listings API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the six record kinds: **States**, **Cities**, **Amenities**,
//!   **Users**, **Places** and **Reviews**
//! - Define the [`Resource`](resource::Resource) contract shared by every
//!   kind, including the whitelist of client-assignable fields
//! - Read client JSON payloads field by field
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod payload;
pub mod resource;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod stats;
pub mod user;
