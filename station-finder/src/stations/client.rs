//! Gas station API client.

use tracing::error;

use crate::api::{ApiClient, ApiError, RequestOptions};
use crate::config::ClientConfig;

use super::error::StationError;
use super::query::NearbyQuery;

/// A station record exactly as the backend returned it.
pub type Station = serde_json::Value;

/// Client for the gas station endpoints.
#[derive(Debug, Clone)]
pub struct StationClient {
    api: ApiClient,
    api_base: String,
}

impl StationClient {
    /// Create a new station client.
    pub fn new(config: &ClientConfig) -> Result<Self, StationError> {
        let api = ApiClient::new(config).map_err(StationError::Client)?;
        Ok(Self::with_api(api, config))
    }

    /// Create a station client on top of an existing request helper.
    pub fn with_api(api: ApiClient, config: &ClientConfig) -> Self {
        Self {
            api,
            api_base: config.api_base.clone(),
        }
    }

    /// Path of the station collection.
    fn stations_path(&self) -> String {
        format!("{}/gas-stations", self.api_base)
    }

    /// Fetch all stations.
    ///
    /// The backend must answer with a JSON array. Any other JSON value fails
    /// as [`ApiError::Json`], wrapped like every other load failure.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, StationError> {
        self.api
            .get(&self.stations_path())
            .await
            .map_err(|source: ApiError| {
                error!(error = %source, "error fetching stations");
                StationError::LoadFailed { source }
            })
    }

    /// Fetch stations within `radius` metres of a coordinate.
    ///
    /// Arguments are validated before anything is sent; see [`NearbyQuery`].
    /// As with [`fetch_stations`](Self::fetch_stations), the response must be
    /// a JSON array.
    pub async fn fetch_nearby_stations(
        &self,
        lat: f64,
        lng: f64,
        radius: f64,
    ) -> Result<Vec<Station>, StationError> {
        let query = NearbyQuery::new(lat, lng, radius)?;
        self.fetch_nearby(&query).await
    }

    /// Fetch stations for an already validated query.
    pub async fn fetch_nearby(&self, query: &NearbyQuery) -> Result<Vec<Station>, StationError> {
        let path = format!("{}/nearby", self.stations_path());
        let options = query
            .params()
            .into_iter()
            .fold(RequestOptions::new(), |options, (key, value)| {
                options.with_query(key, value)
            });

        self.api
            .request(&path, options)
            .await
            .map_err(|source: ApiError| {
                error!(error = %source, "error fetching nearby stations");
                StationError::NearbySearchFailed { source }
            })
    }
}
