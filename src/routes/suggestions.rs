use crate::core::{RankError, RankingEngine};
use crate::models::{ErrorResponse, HealthResponse, RankSuggestionsRequest, RankSuggestionsResponse};
use crate::services::{EventCatalog, PreferenceStore};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PreferenceStore>,
    pub catalog: Arc<dyn EventCatalog>,
    pub engine: RankingEngine,
    pub max_limit: u32,
}

/// Configure all suggestion-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/suggestions/rank", web::post().to(rank_suggestions));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank suggestions endpoint
///
/// POST /api/v1/suggestions/rank
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "page": 1,
///   "limit": 20
/// }
/// ```
async fn rank_suggestions(
    state: web::Data<AppState>,
    req: web::Json<RankSuggestionsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_suggestions request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit to prevent excessive page sizes
    let limit = req.limit.min(state.max_limit);

    tracing::info!(
        "Ranking suggestions for user: {}, page: {}, limit: {}",
        req.user_id,
        req.page,
        limit
    );

    let ranked = match state.engine.rank(
        state.store.as_ref(),
        state.catalog.as_ref(),
        &req.user_id,
        req.page,
        limit,
    ) {
        Ok(ranked) => ranked,
        Err(RankError::InvalidArgument(msg)) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid argument".to_string(),
                message: msg,
                status_code: 400,
            });
        }
        Err(RankError::DependencyUnavailable(msg)) => {
            tracing::error!("Ranking dependency unavailable for {}: {}", req.user_id, msg);
            return HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "Dependency unavailable".to_string(),
                message: msg,
                status_code: 503,
            });
        }
    };

    tracing::info!(
        "Returning {} suggestions for user {} (from {} candidates)",
        ranked.results.len(),
        req.user_id,
        ranked.total_candidates
    );

    HttpResponse::Ok().json(RankSuggestionsResponse {
        suggestions: ranked.results,
        page: req.page,
        limit,
        total_results: ranked.total_candidates,
    })
}
