//! JSON HTTP request helper.
//!
//! Every backend call goes through [`ApiClient::request`], which sends
//! `Content-Type: application/json` unless the caller overrides it and turns
//! non-success responses into [`ApiError::Status`].

mod client;
mod error;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
