// Corpus loading from the tabular recipe dataset.

pub mod models;

pub use models::{Recipe, RecipeRow};

use std::path::Path;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Load the recipe corpus from a CSV file.
///
/// Rows that fail to deserialize are skipped with a warning; only an
/// unreadable file is an error. The returned order is the file order,
/// which becomes each recipe's corpus index.
pub fn load_recipes(path: impl AsRef<Path>) -> Result<Vec<Recipe>> {
    let path = path.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Dataset(format!("failed to open {}: {e}", path.display())))?;

    let mut recipes = Vec::new();
    for (line, result) in reader.deserialize::<RecipeRow>().enumerate() {
        match result {
            Ok(row) => recipes.push(Recipe::from(row)),
            Err(e) => {
                // Header line is 1, so the first data row is line 2
                warn!("Skipping malformed dataset row {}: {}", line + 2, e);
            }
        }
    }

    info!(
        "Dataset loaded from {:?}: {} recipes ({} with empty ingredients)",
        path,
        recipes.len(),
        recipes
            .iter()
            .filter(|r| r.ingredients_tokens.is_empty())
            .count()
    );

    Ok(recipes)
}
