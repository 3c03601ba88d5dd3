// Recommendation engine: term weighting, scoring, constraint filtering,
// and ranking over the in-memory recipe corpus.

pub mod filters;
pub mod normalize;
pub mod rank;
pub mod score;
pub mod tfidf;

// Re-exports
pub use filters::Constraints;
pub use score::Candidate;
pub use tfidf::{SparseVector, TfidfModel};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RecommenderConfig;
use crate::dataset::models::Recipe;

/// One ranked result projected to the external response shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub description: String,
    pub ingredients_raw: String,
    pub overlap: usize,
    pub image_url: String,
    pub prep_time_minutes: Option<i64>,
    pub cook_time_minutes: Option<i64>,
    pub matched_ingredients: String,
}

/// The engine: an immutable corpus plus a term-weight model fit over it
/// once at startup. Shared read-only across requests (wrap in `Arc`);
/// `recommend` allocates all per-request state locally.
pub struct Recommender {
    corpus: Vec<Recipe>,
    model: TfidfModel,
    config: RecommenderConfig,
}

impl Recommender {
    /// Fit the term-weight model over the corpus and freeze both.
    pub fn new(corpus: Vec<Recipe>, config: RecommenderConfig) -> Self {
        let docs: Vec<String> = corpus
            .iter()
            .map(|r| r.ingredients_normalized.clone())
            .collect();
        let model = TfidfModel::fit(&docs);

        debug!(
            "Recommender fitted: {} recipes, {} vocabulary terms",
            corpus.len(),
            model.vocabulary_len()
        );

        Self {
            corpus,
            model,
            config,
        }
    }

    /// Rank the corpus against the user's available ingredients and soft
    /// constraints. A query that normalizes to zero tokens returns an
    /// empty result without scoring.
    pub fn recommend(
        &self,
        available: &[String],
        constraints: &Constraints,
    ) -> Vec<Recommendation> {
        let query_tokens = normalize::query_tokens(available);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let query_text = query_tokens
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        let query_vector = self.model.transform(&query_text);

        let candidates = score::score_corpus(&self.corpus, &self.model, &query_tokens, &query_vector);
        let filtered = filters::apply(&self.corpus, &candidates, constraints, self.config.min_keep);
        let ranked = rank::rank(filtered, self.config.top_k);

        ranked
            .into_iter()
            .map(|c| self.project(&c))
            .collect()
    }

    fn project(&self, candidate: &Candidate) -> Recommendation {
        let recipe = &self.corpus[candidate.index];
        Recommendation {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            ingredients_raw: recipe.ingredients_raw.clone(),
            overlap: candidate.overlap,
            image_url: recipe.image_url.clone(),
            prep_time_minutes: recipe.prep_time_minutes,
            cook_time_minutes: recipe.cook_time_minutes,
            matched_ingredients: candidate.matched_ingredients.clone(),
        }
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.model.vocabulary_len()
    }

    /// Distinct course labels in the corpus, sorted, for the web form.
    pub fn courses(&self) -> Vec<String> {
        let mut courses: Vec<String> = self
            .corpus
            .iter()
            .map(|r| r.course.clone())
            .filter(|c| !c.is_empty())
            .collect();
        courses.sort();
        courses.dedup();
        courses
    }
}
