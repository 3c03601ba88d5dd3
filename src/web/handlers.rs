use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::{api::handlers::AppState, error::Error, Result};

/// Index page template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    courses: Vec<String>,
    total_recipes: usize,
}

/// GET / - Ingredient search page
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let template = IndexTemplate {
        courses: state.recommender.courses(),
        total_recipes: state.recommender.corpus_len(),
    };

    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}
