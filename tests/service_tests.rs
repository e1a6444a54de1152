// HTTP-mocked tests for the service collaborators

use sortie_algo::models::{SearchQuery, SubscriptionTier, VenueStatus};
use sortie_algo::services::{resolve_origin, GeocodingClient, SupabaseClient};

#[tokio::test]
async fn test_fetch_venues_parses_postgrest_rows() {
    let mut server = mockito::Server::new_async().await;

    let body = serde_json::json!([
        {
            "id": "battlekart",
            "name": "BattleKart Dijon",
            "latitude": 47.35,
            "longitude": 5.06,
            "activities": ["karting"],
            "tags": [{"label": "sensations", "weight": 8, "type": "manual"}],
            "view_count": 120,
            "subscription_tier": "PREMIUM",
            "created_at": "2024-06-01T10:00:00Z"
        },
        {
            "id": "broken",
            "name": 42
        }
    ]);

    let mock = server
        .mock("GET", "/rest/v1/venues")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "test-key".to_string(), "venues".to_string());
    let venues = client
        .fetch_venues(VenueStatus::Active, None)
        .await
        .expect("fetch should succeed");

    mock.assert_async().await;

    // The malformed row is skipped, not fatal.
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].id, "battlekart");
    assert_eq!(venues[0].subscription_tier, SubscriptionTier::Premium);
    assert_eq!(venues[0].tags[0].kind, "manual");
}

#[tokio::test]
async fn test_fetch_venues_surfaces_http_errors() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/rest/v1/venues")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "test-key".to_string(), "venues".to_string());
    let result = client.fetch_venues(VenueStatus::Active, None).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_geocoder_parses_lon_lat_pair() {
    let mut server = mockito::Server::new_async().await;

    let body = serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [5.0415, 47.3220]},
            "properties": {"label": "Dijon", "city": "Dijon"}
        }]
    });

    let _mock = server
        .mock("GET", "/search/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = GeocodingClient::new(server.url());
    let coords = client.resolve("Dijon").await.expect("resolve should succeed");

    // GeoJSON coordinates are [lon, lat]
    assert!((coords.lat - 47.3220).abs() < 1e-9);
    assert!((coords.lng - 5.0415).abs() < 1e-9);
}

#[tokio::test]
async fn test_resolve_origin_prefers_explicit_coordinates() {
    // The geocoder must not even be called when lat/lng are provided, so an
    // unreachable endpoint is fine here.
    let client = GeocodingClient::new("http://127.0.0.1:1".to_string());

    let query = SearchQuery {
        envie: "kart".to_string(),
        ville: Some("Dijon".to_string()),
        lat: Some(48.0),
        lng: Some(5.5),
        ..SearchQuery::default()
    };

    let fallback = sortie_algo::Coordinates { lat: 0.0, lng: 0.0 };
    let origin = resolve_origin(&client, &query, fallback).await;

    assert_eq!(origin.lat, 48.0);
    assert_eq!(origin.lng, 5.5);
}

#[tokio::test]
async fn test_resolve_origin_falls_back_on_geocoding_failure() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/search/")
        .match_query(mockito::Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = GeocodingClient::new(server.url());

    let query = SearchQuery {
        envie: "kart".to_string(),
        ville: Some("Nulle-Part".to_string()),
        ..SearchQuery::default()
    };

    let fallback = sortie_algo::Coordinates { lat: 47.3220, lng: 5.0415 };
    let origin = resolve_origin(&client, &query, fallback).await;

    // Geocoding failure never fails the request; the default point is used.
    assert_eq!(origin.lat, fallback.lat);
    assert_eq!(origin.lng, fallback.lng);
}

#[tokio::test]
async fn test_geocoder_empty_feature_list_is_no_result() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/search/")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type": "FeatureCollection", "features": []}"#)
        .create_async()
        .await;

    let client = GeocodingClient::new(server.url());
    assert!(client.resolve("Atlantide").await.is_err());
}
