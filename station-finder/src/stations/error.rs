//! Station fetch error types.
//!
//! Messages are German because they are shown to end users as-is.

use crate::api::ApiError;

use super::query::InvalidQuery;

/// Errors from the station fetchers.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Nearby search arguments were rejected before any request was sent
    #[error(transparent)]
    InvalidQuery(#[from] InvalidQuery),

    /// Loading the full station list failed
    #[error("Tankstellen konnten nicht geladen werden: {source}")]
    LoadFailed {
        #[source]
        source: ApiError,
    },

    /// Nearby search request failed
    #[error("Standortbasierte Suche fehlgeschlagen: {source}")]
    NearbySearchFailed {
        #[source]
        source: ApiError,
    },

    /// The underlying HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] ApiError),
}

impl StationError {
    /// HTTP status of the failed backend response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            StationError::LoadFailed { source } | StationError::NearbySearchFailed { source } => {
                source.status()
            }
            _ => None,
        }
    }
}
