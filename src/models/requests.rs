use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query-string parameters for the venue search endpoint.
///
/// `envie` is the free-text desire ("faire du kart ce soir"). The reference
/// point comes from `lat`/`lng` when present, otherwise from geocoding
/// `ville`, otherwise from the configured default.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    #[serde(default)]
    pub envie: String,
    #[serde(default)]
    pub ville: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[validate(range(min = 0.1, max = 500.0))]
    #[serde(default = "default_radius")]
    pub rayon: f64,
    #[serde(default = "default_filter")]
    pub filter: String,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_radius() -> f64 {
    5.0
}

fn default_filter() -> String {
    "popular".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    15
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            envie: String::new(),
            ville: None,
            lat: None,
            lng: None,
            rayon: default_radius(),
            filter: default_filter(),
            page: default_page(),
            limit: default_limit(),
        }
    }
}
