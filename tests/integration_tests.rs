// Integration tests for Sortie Algo: full pipeline against fixture venues

use chrono::{NaiveDate, NaiveDateTime};
use sortie_algo::core::{SearchEngine, SearchError};
use sortie_algo::models::{Coordinates, SearchQuery, Venue};

const DIJON: Coordinates = Coordinates {
    lat: 47.3220,
    lng: 5.0415,
};

fn tuesday_afternoon() -> NaiveDateTime {
    // 2025-01-07 is a Tuesday
    NaiveDate::from_ymd_opt(2025, 1, 7)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap()
}

fn query(envie: &str) -> SearchQuery {
    SearchQuery {
        envie: envie.to_string(),
        ..SearchQuery::default()
    }
}

/// Karting venue: one matching activity, no tags.
fn battlekart() -> Venue {
    serde_json::from_value(serde_json::json!({
        "id": "battlekart",
        "name": "BattleKart Dijon",
        "description": "Karting électrique en réalité augmentée",
        "latitude": 47.3500,
        "longitude": 5.0600,
        "activities": ["karting"],
        "view_count": 120,
        "like_count": 30,
        "opening_hours": {
            "tuesday": {"is_open": true, "slots": [{"start": "11:00", "end": "23:00"}]}
        },
        "created_at": "2024-06-01T10:00:00Z",
    }))
    .unwrap()
}

/// Bar venue: one drinking activity plus six weighted ambiance tags.
fn m_beer() -> Venue {
    serde_json::from_value(serde_json::json!({
        "id": "m-beer",
        "name": "M' Beer",
        "description": "Bar à bières et cocktails au centre-ville",
        "latitude": 47.3210,
        "longitude": 5.0420,
        "activities": ["bar_bières"],
        "tags": [
            {"label": "cocktails", "weight": 10, "type": "manual"},
            {"label": "danse", "weight": 10, "type": "manual"},
            {"label": "dj", "weight": 10, "type": "envie"},
            {"label": "soirée dansante", "weight": 10, "type": "envie"},
            {"label": "concerts", "weight": 3, "type": "manual"},
            {"label": "live music", "weight": 3, "type": "envie"},
        ],
        "view_count": 300,
        "like_count": 85,
        "price_min": 6.0,
        "average_rating": 4.4,
        "created_at": "2023-11-15T10:00:00Z",
    }))
    .unwrap()
}

fn fixtures() -> Vec<Venue> {
    vec![battlekart(), m_beer()]
}

fn score_of(results: &[sortie_algo::ScoredVenue], id: &str) -> Option<f64> {
    results.iter().find(|v| v.id == id).map(|v| v.score)
}

#[test]
fn test_kart_query_ranks_karting_venue_first() {
    let engine = SearchEngine::with_defaults();
    let outcome = engine
        .search(&query("faire du kart ce soir"), DIJON, fixtures(), tuesday_afternoon())
        .unwrap();

    let kart = score_of(&outcome.results, "battlekart").expect("battlekart in results");
    let beer = score_of(&outcome.results, "m-beer").unwrap_or(0.0);

    assert!(kart > 150.0, "karting venue should clear 150, got {}", kart);
    assert!(kart > beer, "karting venue should outrank the bar");
}

#[test]
fn test_beer_query_ranks_bar_first() {
    let engine = SearchEngine::with_defaults();
    let outcome = engine
        .search(&query("boire une bière ce soir"), DIJON, fixtures(), tuesday_afternoon())
        .unwrap();

    let beer = score_of(&outcome.results, "m-beer").expect("m-beer in results");
    let kart = score_of(&outcome.results, "battlekart").unwrap_or(0.0);

    assert!(beer > kart, "bar should outrank the karting venue");
}

#[test]
fn test_context_only_query_scores_low() {
    let engine = SearchEngine::with_defaults();
    let outcome = engine
        .search(&query("sortir ce soir"), DIJON, fixtures(), tuesday_afternoon())
        .unwrap();

    // Both venues must stay far below what action-keyword queries produce. The
    // karting venue has no context matches at all, so it is gated out.
    let kart = score_of(&outcome.results, "battlekart").unwrap_or(0.0);
    let beer = score_of(&outcome.results, "m-beer").unwrap_or(0.0);

    assert!(kart < 50.0, "karting venue scored {}", kart);
    assert!(beer < 100.0, "bar scored {}", beer);
}

#[test]
fn test_zero_thematic_score_excluded_under_every_strategy() {
    let engine = SearchEngine::with_defaults();

    for filter in ["popular", "wanted", "cheap", "premium", "newest", "rating", "bogus"] {
        let mut q = query("faire du kart");
        q.filter = filter.to_string();

        let outcome = engine
            .search(&q, DIJON, fixtures(), tuesday_afternoon())
            .unwrap();

        assert!(
            outcome.results.iter().all(|v| v.id != "m-beer"),
            "bar has no kart relevance and must be absent under {:?}",
            filter
        );
    }
}

#[test]
fn test_pagination_bounds_hold() {
    let engine = SearchEngine::with_defaults();

    let candidates: Vec<Venue> = (0..37)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": format!("kart-{:02}", i),
                "name": format!("Karting {}", i),
                "latitude": DIJON.lat,
                "longitude": DIJON.lng,
                "activities": ["karting"],
                "view_count": i,
            }))
            .unwrap()
        })
        .collect();

    let mut q = query("kart");
    q.limit = 10;
    q.page = 4;

    let outcome = engine
        .search(&q, DIJON, candidates, tuesday_afternoon())
        .unwrap();

    assert_eq!(outcome.pagination.total_results, 37);
    assert_eq!(outcome.pagination.total_pages, 4);
    assert_eq!(outcome.results.len(), 7);
    assert!(!outcome.pagination.has_more);
}

#[test]
fn test_idempotent_ranking() {
    let engine = SearchEngine::with_defaults();

    let run = || {
        engine
            .search(&query("boire une bière"), DIJON, fixtures(), tuesday_afternoon())
            .unwrap()
            .results
            .iter()
            .map(|v| (v.id.clone(), v.score))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_geo_filter_origin_kept_six_km_excluded() {
    let engine = SearchEngine::with_defaults();

    let candidates: Vec<Venue> = vec![
        serde_json::from_value(serde_json::json!({
            "id": "at-origin",
            "name": "Karting Centre",
            "latitude": DIJON.lat,
            "longitude": DIJON.lng,
            "activities": ["karting"],
        }))
        .unwrap(),
        // ~6km north
        serde_json::from_value(serde_json::json!({
            "id": "six-km",
            "name": "Karting Périphérie",
            "latitude": DIJON.lat + 0.054,
            "longitude": DIJON.lng,
            "activities": ["karting"],
        }))
        .unwrap(),
    ];

    let mut q = query("kart");
    q.rayon = 5.0;

    let outcome = engine
        .search(&q, DIJON, candidates, tuesday_afternoon())
        .unwrap();

    assert!(outcome.results.iter().any(|v| v.id == "at-origin"));
    assert!(outcome.results.iter().all(|v| v.id != "six-km"));
}

#[test]
fn test_open_venue_outscores_closed_twin() {
    let engine = SearchEngine::with_defaults();

    let open: Venue = serde_json::from_value(serde_json::json!({
        "id": "open",
        "name": "Karting Ouvert",
        "latitude": DIJON.lat,
        "longitude": DIJON.lng,
        "activities": ["karting"],
        "opening_hours": {
            "tuesday": {"is_open": true, "slots": [{"start": "11:00", "end": "23:00"}]}
        },
    }))
    .unwrap();
    let closed: Venue = serde_json::from_value(serde_json::json!({
        "id": "closed",
        "name": "Karting Ferme",
        "latitude": DIJON.lat,
        "longitude": DIJON.lng,
        "activities": ["karting"],
        "opening_hours": {
            "tuesday": {"is_open": false, "slots": []}
        },
    }))
    .unwrap();

    let outcome = engine
        .search(&query("kart"), DIJON, vec![open, closed], tuesday_afternoon())
        .unwrap();

    assert_eq!(outcome.results[0].id, "open");
    assert!(outcome.results[0].is_open);
    assert!(!outcome.results[1].is_open);
}

#[test]
fn test_sort_strategies_reorder_relevant_set() {
    let engine = SearchEngine::with_defaults();

    // Both venues are beer-relevant; make the karting one a bar too.
    let cheap_bar: Venue = serde_json::from_value(serde_json::json!({
        "id": "cheap-bar",
        "name": "Bière Pas Chère",
        "latitude": DIJON.lat,
        "longitude": DIJON.lng,
        "activities": ["bar_bières"],
        "view_count": 10,
        "price_min": 3.0,
        "created_at": "2025-01-01T10:00:00Z",
    }))
    .unwrap();

    let mut q = query("boire une bière");
    q.filter = "cheap".to_string();
    let outcome = engine
        .search(&q, DIJON, vec![m_beer(), cheap_bar.clone()], tuesday_afternoon())
        .unwrap();
    assert_eq!(outcome.results[0].id, "cheap-bar");

    let mut q = query("boire une bière");
    q.filter = "newest".to_string();
    let outcome = engine
        .search(&q, DIJON, vec![m_beer(), cheap_bar], tuesday_afternoon())
        .unwrap();
    assert_eq!(outcome.results[0].id, "cheap-bar");
}

#[test]
fn test_missing_envie_and_stop_word_queries_fail() {
    let engine = SearchEngine::with_defaults();

    let blank = engine.search(&query(""), DIJON, fixtures(), tuesday_afternoon());
    assert!(matches!(blank, Err(SearchError::MissingQuery)));

    let insignificant = engine.search(
        &query("envie de sortir"),
        DIJON,
        fixtures(),
        tuesday_afternoon(),
    );
    assert!(matches!(insignificant, Err(SearchError::NoSignificantKeywords)));
}

#[test]
fn test_venue_without_coordinates_can_still_rank() {
    let engine = SearchEngine::with_defaults();

    let nowhere: Venue = serde_json::from_value(serde_json::json!({
        "id": "no-geo",
        "name": "Karting Itinérant",
        "activities": ["karting"],
    }))
    .unwrap();

    let outcome = engine
        .search(&query("kart"), DIJON, vec![nowhere], tuesday_afternoon())
        .unwrap();

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].distance_km, None);
    // No coordinates also means no proximity bonus.
    assert_eq!(outcome.results[0].score, outcome.results[0].thematic_score);
}
