//! Gas station fetchers.
//!
//! Thin wrappers over the request helper that validate nearby-search
//! coordinates up front and turn backend failures into user-facing German
//! messages, logging the original error.

mod client;
mod error;
mod query;

pub use client::{Station, StationClient};
pub use error::StationError;
pub use query::{InvalidQuery, MAX_RADIUS_METRES, NearbyQuery};
