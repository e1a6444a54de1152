// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinates, DaySchedule, KeywordKind, KeywordSet, ScoredVenue, SubscriptionTier, TimeSlot,
    Venue, VenueEvent, VenueStatus, VenueTag, WeeklySchedule,
};
pub use requests::SearchQuery;
pub use responses::{ErrorResponse, HealthResponse, Pagination, QueryEcho, SearchResponse};
