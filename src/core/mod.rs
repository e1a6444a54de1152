// Core search pipeline exports
pub mod distance;
pub mod engine;
pub mod keywords;
pub mod opening;
pub mod pagination;
pub mod scoring;
pub mod sorting;

pub use distance::{calculate_bounding_box, filter_by_radius, haversine_distance, round_km};
pub use engine::{SearchEngine, SearchError, SearchOutcome};
pub use keywords::{KeywordExtractor, WordLists};
pub use opening::is_open_now;
pub use pagination::paginate;
pub use scoring::{proximity_bonus, score_venue, ScoringProfile, VenueScore};
pub use sorting::{apply_sort, SortStrategy};
