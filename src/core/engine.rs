use chrono::NaiveDateTime;
use thiserror::Error;

use crate::core::{
    distance::{filter_by_radius, round_km},
    keywords::KeywordExtractor,
    opening::is_open_now,
    pagination::paginate,
    scoring::{proximity_bonus, score_venue, ScoringProfile},
    sorting::{apply_sort, SortStrategy},
};
use crate::models::{
    Coordinates, KeywordSet, Pagination, ScoredVenue, SearchQuery, Venue, VenueEvent,
};

/// Errors the search pipeline can surface to the caller.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("missing 'envie' query parameter")]
    MissingQuery,

    #[error("no significant keyword in query")]
    NoSignificantKeywords,
}

/// Result of a full search pass.
#[derive(Debug)]
pub struct SearchOutcome {
    pub results: Vec<ScoredVenue>,
    pub pagination: Pagination,
    pub keywords: KeywordSet,
    pub origin: Coordinates,
    pub strategy: SortStrategy,
}

/// Search pipeline orchestrator.
///
/// # Pipeline stages
/// 1. Validate the query text
/// 2. Extract and classify keywords
/// 3. Geo radius filter (venues without coordinates are kept)
/// 4. Score and gate on thematic relevance
/// 5. Relevance ordering, then the requested sort strategy
/// 6. Pagination
///
/// The engine is pure: candidates are fetched and the reference point
/// resolved by the caller, so concurrent requests share nothing.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    extractor: KeywordExtractor,
    profile: ScoringProfile,
}

impl SearchEngine {
    pub fn new(extractor: KeywordExtractor, profile: ScoringProfile) -> Self {
        Self { extractor, profile }
    }

    pub fn with_defaults() -> Self {
        Self::new(KeywordExtractor::default(), ScoringProfile::default())
    }

    /// Run the full pipeline over the candidate set.
    ///
    /// `origin` is the resolved reference point (explicit, geocoded, or the
    /// configured default) and `now` the wall clock used for opening hours
    /// and upcoming events.
    pub fn search(
        &self,
        query: &SearchQuery,
        origin: Coordinates,
        candidates: Vec<Venue>,
        now: NaiveDateTime,
    ) -> Result<SearchOutcome, SearchError> {
        // Stage 1: validate
        if query.envie.trim().is_empty() {
            return Err(SearchError::MissingQuery);
        }

        // Stage 2: extract keywords
        let keywords = self.extractor.extract(&query.envie);
        if keywords.is_empty() {
            return Err(SearchError::NoSignificantKeywords);
        }

        tracing::debug!(
            "Extracted {} keywords ({} primary, {} context) from {:?}",
            keywords.all.len(),
            keywords.primary.len(),
            keywords.context.len(),
            query.envie
        );

        let total_candidates = candidates.len();

        // Stage 3: geo filter
        let in_range = filter_by_radius(candidates, origin, query.rayon);

        tracing::debug!(
            "{} of {} candidates within {}km",
            in_range.len(),
            total_candidates,
            query.rayon
        );

        // Stage 4: score and gate on thematic relevance
        let mut scored: Vec<ScoredVenue> = in_range
            .into_iter()
            .filter_map(|(venue, distance_km)| {
                let is_open = is_open_now(venue.opening_hours.as_ref(), now);
                let score = score_venue(&venue, &keywords, is_open, &self.profile);

                if score.thematic_score <= 0.0 {
                    return None;
                }

                // Proximity only shapes ranking among relevant venues.
                let bonus = distance_km
                    .map(|d| proximity_bonus(d, &self.profile))
                    .unwrap_or(0.0);

                Some(build_scored_venue(
                    venue,
                    score.thematic_score,
                    score.thematic_score + bonus,
                    distance_km.map(round_km),
                    is_open,
                    score.matched_tags,
                    now,
                ))
            })
            .collect();

        // Stage 5: relevance order, deterministic tie-breaks, then strategy
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    let da = a.distance_km.unwrap_or(f64::MAX);
                    let db = b.distance_km.unwrap_or(f64::MAX);
                    da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.id.cmp(&b.id))
        });

        let strategy = SortStrategy::parse(&query.filter);
        apply_sort(&mut scored, strategy);

        // Stage 6: paginate
        let (results, pagination) = paginate(scored, query.page, query.limit);

        tracing::info!(
            "Search {:?} matched {} venues, returning page {}/{}",
            query.envie,
            pagination.total_results,
            pagination.current_page,
            pagination.total_pages
        );

        Ok(SearchOutcome {
            results,
            pagination,
            keywords,
            origin,
            strategy,
        })
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn build_scored_venue(
    venue: Venue,
    thematic_score: f64,
    final_score: f64,
    distance_km: Option<f64>,
    is_open: bool,
    matched_tags: Vec<String>,
    now: NaiveDateTime,
) -> ScoredVenue {
    let next_event = next_upcoming_event(&venue.events, now);

    ScoredVenue {
        id: venue.id,
        name: venue.name,
        description: venue.description,
        latitude: venue.latitude,
        longitude: venue.longitude,
        score: final_score,
        thematic_score,
        distance_km,
        is_open,
        matched_tags,
        image_url: venue.image_urls.into_iter().next(),
        next_event,
        view_count: venue.view_count,
        like_count: venue.like_count,
        price_min: venue.price_min,
        average_price: venue.average_price,
        average_rating: venue.average_rating,
        subscription_tier: venue.subscription_tier,
        created_at: venue.created_at,
    }
}

/// Earliest event that has not started yet, if any.
fn next_upcoming_event(events: &[VenueEvent], now: NaiveDateTime) -> Option<VenueEvent> {
    events
        .iter()
        .filter(|e| e.starts_at.naive_utc() >= now)
        .min_by_key(|e| e.starts_at)
        .cloned()
}
