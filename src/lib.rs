//! Sortie Algo - High-performance envie search service for the Sortie app
//!
//! This library turns a free-text "envie" query ("faire du kart ce soir")
//! into a ranked, paginated, geo-filtered list of venues. It implements a
//! staged pipeline: keyword extraction, radius filtering, multi-signal
//! scoring with a thematic relevance gate, named sort strategies, and
//! pagination.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance::haversine_distance, KeywordExtractor, ScoringProfile, SearchEngine, SearchError,
    SortStrategy, WordLists,
};
pub use crate::models::{Coordinates, KeywordSet, ScoredVenue, SearchQuery, SearchResponse, Venue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let keywords = KeywordExtractor::default().extract("faire du kart");
        assert_eq!(keywords.primary, vec!["kart"]);
    }
}
