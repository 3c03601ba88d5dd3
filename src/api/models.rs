use serde::{Deserialize, Serialize};

/// Recommendation request body.
///
/// `ingredients` is a single comma-delimited string, mirroring the form
/// input upstream. `max_time` is accepted for contract compatibility but
/// is not applied to filtering.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub taste: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub dietary: Option<String>,
    #[serde(default)]
    pub max_time: Option<String>,
}

/// System statistics
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total_recipes: usize,
    pub vocabulary_size: usize,
    pub total_courses: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub corpus: String,
    pub index: String,
}
