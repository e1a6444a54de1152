use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::SearchEngine;
use crate::models::{
    Coordinates, ErrorResponse, HealthResponse, QueryEcho, SearchQuery, SearchResponse,
    VenueStatus,
};
use crate::services::{resolve_origin, GeocodingClient, SupabaseClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub geocoder: Arc<GeocodingClient>,
    pub engine: SearchEngine,
    pub default_origin: Coordinates,
    pub max_limit: u32,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/venues/search", web::get().to(search_venues));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let repo_healthy = state.supabase.health_check().await.unwrap_or(false);

    let status = if repo_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Venue search endpoint
///
/// GET /api/v1/venues/search?envie=faire+du+kart+ce+soir&ville=Dijon&rayon=5&filter=popular&page=1&limit=15
async fn search_venues(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let mut query = query.into_inner();

    if query.envie.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "missing_envie".to_string(),
            message: "The 'envie' query parameter is required".to_string(),
            status_code: 400,
        });
    }

    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_parameters".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    query.limit = query.limit.min(state.max_limit);

    tracing::info!(
        "Searching venues for envie {:?} (ville: {:?}, rayon: {}km, filter: {})",
        query.envie,
        query.ville,
        query.rayon,
        query.filter
    );

    // Resolve the reference point: explicit coordinates, then geocoded
    // place name, then the configured default.
    let origin = resolve_origin(&state.geocoder, &query, state.default_origin).await;

    // Fetch candidates from the venue repository
    let candidates = match state.supabase.fetch_venues(VenueStatus::Active, None).await {
        Ok(venues) => venues,
        Err(e) => {
            tracing::error!("Failed to fetch venues: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "repository_error".to_string(),
                message: "Failed to fetch venues".to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Fetched {} candidate venues", candidates.len());

    // Run the search pipeline
    let now = chrono::Local::now().naive_local();
    let outcome = match state.engine.search(&query, origin, candidates, now) {
        Ok(outcome) => outcome,
        // Both engine failures are input problems: missing text, or a
        // query with no significant keyword.
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_query".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    tracing::info!(
        "Returning {} of {} venues for envie {:?}",
        outcome.results.len(),
        outcome.pagination.total_results,
        query.envie
    );

    HttpResponse::Ok().json(SearchResponse {
        success: true,
        results: outcome.results,
        pagination: outcome.pagination,
        filter: outcome.strategy.as_str().to_string(),
        query: QueryEcho {
            envie: query.envie,
            ville: query.ville,
            rayon: query.rayon,
            keywords: outcome.keywords.all,
            coordinates: outcome.origin,
        },
    })
}
