use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::ListingScorer;
use crate::error::ApiError;
use crate::models::{HealthResponse, ScoreListingsRequest, ScoreListingsResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: ListingScorer,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/ads/score", web::post().to(score_listings));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score listings endpoint
///
/// POST /api/v1/ads/score
///
/// Request body:
/// ```json
/// {
///   "listings": [{"property_type": "house", "price": 100, "rooms": 3.0, "has_parking": true}],
///   "preferences": {"house_type": "private_house", "budget_min": 50, "budget_max": 100,
///                   "rooms": "3", "features": "[\"parking\"]"},
///   "sort": false
/// }
/// ```
///
/// Each returned ad carries `score` and `stars` only when `preferences` was
/// supplied.
async fn score_listings(
    state: web::Data<AppState>,
    req: web::Json<ScoreListingsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let ScoreListingsRequest {
        listings,
        preferences,
        sort,
    } = req.into_inner();
    let total_results = listings.len();

    tracing::info!(
        "Scoring {} listings (preferences: {}, sorted: {})",
        total_results,
        preferences.is_some(),
        sort
    );

    let ads = if sort {
        state.scorer.rank(preferences.as_ref(), listings)
    } else {
        state.scorer.score_listings(preferences.as_ref(), listings)
    };

    Ok(HttpResponse::Ok().json(ScoreListingsResponse { ads, total_results }))
}
