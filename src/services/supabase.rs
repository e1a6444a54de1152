use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::models::{SubscriptionTier, Venue, VenueStatus};

/// Errors that can occur when querying the Supabase venue table
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Supabase PostgREST client, the venue repository collaborator.
///
/// The search core treats this data as read-only input: candidates are
/// fetched fresh per request and nothing is written back.
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    venues_table: String,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, api_key: String, venues_table: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
            venues_table,
        }
    }

    /// Fetch candidate venues for a search pass.
    ///
    /// `status` pre-filters on the venue lifecycle column; an optional
    /// subscription tier narrows to that tier only. Rows that fail to
    /// decode are skipped rather than failing the whole fetch, since one
    /// malformed record must not take search down.
    pub async fn fetch_venues(
        &self,
        status: VenueStatus,
        tier: Option<SubscriptionTier>,
    ) -> Result<Vec<Venue>, SupabaseError> {
        let mut url = format!(
            "{}/rest/v1/{}?select=*&status=eq.{}",
            self.base_url.trim_end_matches('/'),
            self.venues_table,
            urlencoding::encode(status.as_str()),
        );

        if let Some(tier) = tier {
            let tier_key = match tier {
                SubscriptionTier::Premium => "PREMIUM",
                SubscriptionTier::Free => "FREE",
            };
            url.push_str(&format!("&subscription_tier=eq.{}", tier_key));
        }

        tracing::debug!("Fetching venues from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to fetch venues: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected a JSON array".into()))?;

        let total = rows.len();
        let venues: Vec<Venue> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(venue) => Some(venue),
                Err(e) => {
                    tracing::warn!("Skipping undecodable venue row: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} venues ({} rows)", venues.len(), total);

        Ok(venues)
    }

    /// Reachability probe for the health endpoint.
    pub async fn health_check(&self) -> Result<bool, SupabaseError> {
        let url = format!(
            "{}/rest/v1/{}?select=id&limit=1",
            self.base_url.trim_end_matches('/'),
            self.venues_table,
        );

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}
