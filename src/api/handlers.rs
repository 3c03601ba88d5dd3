use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

use crate::{
    api::models::*,
    recommender::{Constraints, Recommendation, Recommender},
    Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub settings: crate::config::Settings,
}

/// POST /api/recommend - Rank recipes against available ingredients
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Vec<Recommendation>>> {
    debug!("Recommend request: {:?}", request);

    // The form ships ingredients as one delimited string; the engine
    // normalizes each entry and drops empties.
    let available: Vec<String> = request
        .ingredients
        .split(',')
        .map(|s| s.to_string())
        .collect();

    let constraints = Constraints {
        taste: request.taste,
        course: request.course,
        dietary: request.dietary,
        max_time: request.max_time,
    };

    let results = state.recommender.recommend(&available, &constraints);

    Ok(Json(results))
}

/// GET /api/stats - Get system statistics
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>> {
    debug!("Get stats request");

    Ok(Json(Stats {
        total_recipes: state.recommender.corpus_len(),
        vocabulary_size: state.recommender.vocabulary_len(),
        total_courses: state.recommender.courses().len(),
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    // The corpus and index are built before the router starts, so
    // readiness reduces to the corpus being non-empty.
    let corpus_loaded = state.recommender.corpus_len() > 0;
    let index_fitted = state.recommender.vocabulary_len() > 0;

    Ok(Json(ReadinessResponse {
        ready: corpus_loaded && index_fitted,
        corpus: if corpus_loaded { "ok" } else { "empty" }.to_string(),
        index: if index_fitted { "ok" } else { "empty" }.to_string(),
    }))
}
