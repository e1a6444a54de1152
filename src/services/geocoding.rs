use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Coordinates, SearchQuery};

/// Errors that can occur when resolving a place name
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("No result for place: {0}")]
    NoResult(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Geocoding client for the BAN address API (api-adresse.data.gouv.fr).
///
/// Returns GeoJSON; feature coordinates are `[lon, lat]`.
pub struct GeocodingClient {
    base_url: String,
    client: Client,
}

impl GeocodingClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Resolve a place name to coordinates.
    pub async fn resolve(&self, place: &str) -> Result<Coordinates, GeocodingError> {
        let url = format!(
            "{}/search/?q={}&type=municipality&limit=1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(place),
        );

        tracing::debug!("Geocoding {:?} via {}", place, url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeocodingError::ApiError(format!(
                "Geocoding failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let coords = json
            .get("features")
            .and_then(|f| f.as_array())
            .and_then(|f| f.first())
            .and_then(|f| f.pointer("/geometry/coordinates"))
            .and_then(|c| c.as_array())
            .ok_or_else(|| GeocodingError::NoResult(place.to_string()))?;

        match (coords.first().and_then(Value::as_f64), coords.get(1).and_then(Value::as_f64)) {
            (Some(lng), Some(lat)) => Ok(Coordinates { lat, lng }),
            _ => Err(GeocodingError::InvalidResponse(
                "Feature coordinates are not a [lon, lat] pair".into(),
            )),
        }
    }
}

/// Resolve the search reference point.
///
/// Explicit coordinates win; otherwise the place name is geocoded; a
/// geocoding failure falls back to the configured default point rather
/// than failing the request.
pub async fn resolve_origin(
    geocoder: &GeocodingClient,
    query: &SearchQuery,
    fallback: Coordinates,
) -> Coordinates {
    if let (Some(lat), Some(lng)) = (query.lat, query.lng) {
        return Coordinates { lat, lng };
    }

    if let Some(ville) = query.ville.as_deref().filter(|v| !v.trim().is_empty()) {
        match geocoder.resolve(ville).await {
            Ok(coords) => return coords,
            Err(e) => {
                tracing::warn!(
                    "Geocoding {:?} failed ({}), falling back to default point",
                    ville,
                    e
                );
            }
        }
    }

    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeocodingClient::new("https://api-adresse.data.gouv.fr".to_string());
        assert_eq!(client.base_url, "https://api-adresse.data.gouv.fr");
    }
}
