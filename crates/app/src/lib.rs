//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage gateway port** adapters must implement
//!   (`Repository<R>` per record kind, `ChildRepository<R>` for parent-scoped
//!   kinds, and the `Store` bundle of all six)
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `ResourceService`: list, get, create, update, delete, stats
//! - Enforce the per-kind validation order and field whitelists
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
