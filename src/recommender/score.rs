//! Per-recipe scoring: lexical similarity plus exact-ingredient overlap.

use std::collections::BTreeSet;

use crate::dataset::models::Recipe;
use crate::recommender::tfidf::{SparseVector, TfidfModel};

/// A recipe paired with its request-local scores. Candidates are created
/// fresh per request and never written back into the shared corpus.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Position of the recipe in the corpus.
    pub index: usize,
    pub similarity: f32,
    pub overlap: usize,
    /// Sorted, de-duplicated intersection rendered for display.
    pub matched_ingredients: String,
}

/// Score every recipe in the corpus against the query. Filtering happens
/// downstream, so the output is full corpus width.
pub fn score_corpus(
    corpus: &[Recipe],
    model: &TfidfModel,
    query_tokens: &BTreeSet<String>,
    query_vector: &SparseVector,
) -> Vec<Candidate> {
    corpus
        .iter()
        .enumerate()
        .map(|(index, recipe)| {
            let matched: Vec<&str> = query_tokens
                .intersection(&recipe.ingredients_tokens)
                .map(String::as_str)
                .collect();

            Candidate {
                index,
                similarity: query_vector.cosine(model.doc_vector(index)),
                overlap: matched.len(),
                // BTreeSet intersection iterates in sorted order
                matched_ingredients: matched.join(", "),
            }
        })
        .collect()
}
