use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::recommender::normalize;

/// One corpus recipe, immutable after load. Identity is its position in
/// the corpus vector.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Original free-text ingredient string (may be empty).
    pub ingredients_raw: String,
    /// Comma-split terms lowercased and trimmed, joined with spaces; the
    /// unit the term-weight model is fit on.
    pub ingredients_normalized: String,
    /// Set of lowercase, trimmed ingredient phrases.
    #[serde(skip)]
    pub ingredients_tokens: BTreeSet<String>,
    pub course: String,
    pub image_url: String,
    pub prep_time_minutes: Option<i64>,
    pub cook_time_minutes: Option<i64>,
}

impl Recipe {
    /// Build a recipe, deriving the normalized ingredient forms so corpus
    /// rows and queries always share the same treatment.
    pub fn from_parts(
        name: String,
        description: String,
        ingredients_raw: String,
        course: String,
        image_url: String,
        prep_time_minutes: Option<i64>,
        cook_time_minutes: Option<i64>,
    ) -> Self {
        let ingredients_normalized = normalize::joined(&ingredients_raw);
        let ingredients_tokens = normalize::token_set(&ingredients_raw);

        Self {
            name,
            description,
            ingredients_raw,
            ingredients_normalized,
            ingredients_tokens,
            course,
            image_url,
            prep_time_minutes,
            cook_time_minutes,
        }
    }
}

/// Raw CSV row as the upstream dataset ships it. Every column is optional;
/// absent values become defaults rather than load failures.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients_name: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, rename = "prep_time (in mins)")]
    pub prep_time_minutes: Option<i64>,
    #[serde(default, rename = "cook_time (in mins)")]
    pub cook_time_minutes: Option<i64>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe::from_parts(
            row.name.unwrap_or_default(),
            row.description.unwrap_or_default(),
            row.ingredients_name.unwrap_or_default(),
            row.course.unwrap_or_default(),
            row.image_url.unwrap_or_default(),
            row.prep_time_minutes,
            row.cook_time_minutes,
        )
    }
}
