//! Gas station finder client.
//!
//! Talks to a gas-station-locator backend over JSON HTTP and builds
//! Google Maps links for the stations it finds.

pub mod api;
pub mod config;
pub mod maps;
pub mod mock;
pub mod stations;
