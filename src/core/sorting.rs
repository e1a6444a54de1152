use crate::models::ScoredVenue;

/// Named sort strategies applied on top of the relevance-ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    Popular,
    Wanted,
    Cheap,
    Premium,
    Newest,
    Rating,
    /// Pass-through: keep the relevance order from the scoring stage.
    Relevance,
}

impl SortStrategy {
    /// Parse a request `filter` key. Unknown keys keep the relevance order
    /// rather than failing the request.
    pub fn parse(key: &str) -> Self {
        match key {
            "popular" => SortStrategy::Popular,
            "wanted" => SortStrategy::Wanted,
            "cheap" => SortStrategy::Cheap,
            "premium" => SortStrategy::Premium,
            "newest" => SortStrategy::Newest,
            "rating" => SortStrategy::Rating,
            _ => SortStrategy::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Popular => "popular",
            SortStrategy::Wanted => "wanted",
            SortStrategy::Cheap => "cheap",
            SortStrategy::Premium => "premium",
            SortStrategy::Newest => "newest",
            SortStrategy::Rating => "rating",
            SortStrategy::Relevance => "relevance",
        }
    }
}

/// Sort scored venues in place.
///
/// Every sort is stable, so venues with equal keys keep the order they
/// arrived in: descending final score, since that is the relevance order
/// produced by the scoring stage.
pub fn apply_sort(venues: &mut [ScoredVenue], strategy: SortStrategy) {
    match strategy {
        SortStrategy::Popular => {
            venues.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        }
        SortStrategy::Wanted => {
            venues.sort_by(|a, b| b.like_count.cmp(&a.like_count));
        }
        SortStrategy::Cheap => {
            venues.sort_by(|a, b| {
                a.price_sort_key()
                    .partial_cmp(&b.price_sort_key())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortStrategy::Premium => {
            venues.sort_by(|a, b| {
                b.subscription_tier
                    .rank()
                    .cmp(&a.subscription_tier.rank())
                    .then_with(|| b.created_sort_key().cmp(&a.created_sort_key()))
            });
        }
        SortStrategy::Newest => {
            venues.sort_by(|a, b| b.created_sort_key().cmp(&a.created_sort_key()));
        }
        SortStrategy::Rating => {
            venues.sort_by(|a, b| {
                b.average_rating
                    .unwrap_or(0.0)
                    .partial_cmp(&a.average_rating.unwrap_or(0.0))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortStrategy::Relevance => {}
    }
}
