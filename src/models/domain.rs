use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Weighted tag attached to a venue.
///
/// `kind` distinguishes where the tag came from (`manual`, `envie`, ...);
/// scoring only uses the label and weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueTag {
    pub label: String,
    pub weight: i32,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// One opening slot, local `HH:MM` strings. `end` earlier than `start`
/// means the slot crosses midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

/// Schedule for a single weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default, alias = "isOpen")]
    pub is_open: bool,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

/// Weekly schedule keyed by English lowercase weekday ("monday", ...).
pub type WeeklySchedule = HashMap<String, DaySchedule>;

/// Venue subscription tier. Anything the repository sends that we don't
/// recognize falls back to Free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", rename_all = "UPPERCASE")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

impl From<String> for SubscriptionTier {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "PREMIUM" => SubscriptionTier::Premium,
            _ => SubscriptionTier::Free,
        }
    }
}

impl SubscriptionTier {
    /// Rank used by the `premium` sort strategy (higher sorts first).
    pub fn rank(&self) -> u8 {
        match self {
            SubscriptionTier::Premium => 1,
            SubscriptionTier::Free => 0,
        }
    }
}

/// Lifecycle status used to pre-filter repository candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueStatus {
    Active,
    Draft,
    Suspended,
}

impl VenueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueStatus::Active => "active",
            VenueStatus::Draft => "draft",
            VenueStatus::Suspended => "suspended",
        }
    }
}

/// An event hosted by a venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueEvent {
    pub id: String,
    pub title: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
}

/// Venue record as returned by the repository (snake_case columns).
///
/// Latitude/longitude are nullable: venues without geo data must not be
/// silently dropped by the geo filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub tags: Vec<VenueTag>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub opening_hours: Option<WeeklySchedule>,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub average_price: Option<f64>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub events: Vec<VenueEvent>,
}

impl Venue {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}

/// Keywords extracted from an envie query.
///
/// `all` keeps the original token order (duplicates allowed); `primary` and
/// `context` are the subsets recognized from the word lists. Tokens in
/// neither subset are generic keywords.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordSet {
    pub all: Vec<String>,
    pub primary: Vec<String>,
    pub context: Vec<String>,
}

impl KeywordSet {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn kind_of(&self, keyword: &str) -> KeywordKind {
        if self.primary.iter().any(|k| k == keyword) {
            KeywordKind::Primary
        } else if self.context.iter().any(|k| k == keyword) {
            KeywordKind::Context
        } else {
            KeywordKind::Generic
        }
    }
}

/// Classification of a single extracted keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Primary,
    Context,
    Generic,
}

/// Venue plus everything computed by the scoring pipeline.
///
/// The thematic score is the relevance gate (venues at 0 never reach the
/// response); `score` additionally includes the proximity bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredVenue {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub score: f64,
    #[serde(skip_serializing, default)]
    pub thematic_score: f64,
    pub distance_km: Option<f64>,
    pub is_open: bool,
    pub matched_tags: Vec<String>,
    pub image_url: Option<String>,
    pub next_event: Option<VenueEvent>,
    pub view_count: i64,
    pub like_count: i64,
    pub price_min: Option<f64>,
    pub average_price: Option<f64>,
    pub average_rating: Option<f64>,
    pub subscription_tier: SubscriptionTier,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ScoredVenue {
    /// Key for the `cheap` sort: lowest known price, missing prices sink
    /// to the end.
    pub fn price_sort_key(&self) -> f64 {
        match (self.price_min, self.average_price) {
            (Some(min), Some(avg)) => min.min(avg),
            (Some(min), None) => min,
            (None, Some(avg)) => avg,
            (None, None) => 999.0,
        }
    }

    pub fn created_sort_key(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at.unwrap_or(chrono::DateTime::<chrono::Utc>::MIN_UTC)
    }
}
