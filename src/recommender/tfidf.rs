//! Term-weighted representation of ingredient text.
//!
//! Classical TF-IDF with smooth IDF (`ln((1 + n) / (1 + df)) + 1`) and
//! L2-normalized sparse vectors, so cosine similarity reduces to a sparse
//! dot product. The vocabulary is frozen after `fit`; `transform` silently
//! ignores terms the corpus never produced.

use std::collections::HashMap;

/// Sparse vector: parallel arrays of term indices and weights.
/// Indices are strictly ascending.
#[derive(Debug, Clone, Default)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0f32;
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
            }
        }
        sum
    }

    /// Cosine similarity between two L2-normalized vectors. Defined as 0
    /// when either side is the zero vector.
    pub fn cosine(&self, other: &SparseVector) -> f32 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        // Vectors are unit length, so the dot product is the cosine.
        // Clamp to counter float drift at the boundaries.
        self.dot(other).clamp(0.0, 1.0)
    }

    fn l2_normalize(&mut self) {
        let norm: f32 = self.values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }
}

/// TF-IDF model fit once over the corpus's normalized ingredient strings.
pub struct TfidfModel {
    vocabulary: HashMap<String, u32>,
    idf: Vec<f32>,
    doc_vectors: Vec<SparseVector>,
}

impl TfidfModel {
    /// Build vocabulary, IDF weights, and one document vector per input
    /// string. Documents are whitespace-tokenized; the inputs are expected
    /// to already be normalized (see `normalize::joined`).
    pub fn fit(docs: &[String]) -> Self {
        let n = docs.len() as f32;

        let tokenized: Vec<Vec<&str>> = docs
            .iter()
            .map(|doc| doc.split_whitespace().collect())
            .collect();

        // Document frequency per term
        let mut df: HashMap<&str, u32> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.clone();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Deterministic vocabulary order: alphabetical
        let mut vocab_terms: Vec<(&str, u32)> = df.into_iter().collect();
        vocab_terms.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let vocabulary: HashMap<String, u32> = vocab_terms
            .iter()
            .enumerate()
            .map(|(idx, (term, _))| (term.to_string(), idx as u32))
            .collect();

        // Smooth IDF: ln((1 + n) / (1 + df)) + 1
        let idf: Vec<f32> = vocab_terms
            .iter()
            .map(|(_, doc_freq)| ((1.0 + n) / (1.0 + *doc_freq as f32)).ln() + 1.0)
            .collect();

        let doc_vectors: Vec<SparseVector> = tokenized
            .iter()
            .map(|tokens| build_vector(tokens, &vocabulary, &idf))
            .collect();

        Self {
            vocabulary,
            idf,
            doc_vectors,
        }
    }

    /// Project arbitrary text into the fitted vocabulary space. Terms
    /// absent from the vocabulary contribute nothing.
    pub fn transform(&self, text: &str) -> SparseVector {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        build_vector(&tokens, &self.vocabulary, &self.idf)
    }

    /// Precomputed vector for the document at `index`.
    pub fn doc_vector(&self, index: usize) -> &SparseVector {
        &self.doc_vectors[index]
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn doc_count(&self) -> usize {
        self.doc_vectors.len()
    }
}

/// Raw term counts weighted by IDF, L2-normalized.
fn build_vector(tokens: &[&str], vocabulary: &HashMap<String, u32>, idf: &[f32]) -> SparseVector {
    let mut tf: HashMap<u32, u32> = HashMap::new();
    for token in tokens {
        if let Some(&idx) = vocabulary.get(*token) {
            *tf.entry(idx).or_insert(0) += 1;
        }
    }

    let mut indices: Vec<u32> = tf.keys().copied().collect();
    indices.sort_unstable();

    let values: Vec<f32> = indices
        .iter()
        .map(|&idx| tf[&idx] as f32 * idf[idx as usize])
        .collect();

    let mut vector = SparseVector { indices, values };
    vector.l2_normalize();
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(docs: &[&str]) -> TfidfModel {
        let docs: Vec<String> = docs.iter().map(|s| s.to_string()).collect();
        TfidfModel::fit(&docs)
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let model = fit(&["tomato onion salt", "onion garlic"]);
        assert_eq!(model.vocabulary_len(), 4);
        assert_eq!(model.doc_count(), 2);
    }

    #[test]
    fn test_fit_empty_corpus() {
        let model = fit(&[]);
        assert_eq!(model.vocabulary_len(), 0);
        assert!(model.transform("anything").is_zero());
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let model = fit(&["tomato onion", "garlic"]);
        let vector = model.transform("unobtainium");
        assert!(vector.is_zero());

        // Known and unknown mixed: only the known term contributes
        let mixed = model.transform("tomato unobtainium");
        assert!(!mixed.is_zero());
        assert_eq!(mixed.indices.len(), 1);
    }

    #[test]
    fn test_doc_vectors_are_unit_length() {
        let model = fit(&["tomato onion salt", "onion garlic", "sugar"]);
        for i in 0..model.doc_count() {
            let vector = model.doc_vector(i);
            let norm: f32 = vector.values.iter().map(|v| v * v).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5, "vector {i} not unit length");
        }
    }

    #[test]
    fn test_cosine_identical_docs() {
        let model = fit(&["tomato onion", "tomato onion"]);
        let sim = model.doc_vector(0).cosine(model.doc_vector(1));
        assert!((sim - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cosine_disjoint_docs() {
        let model = fit(&["tomato onion", "sugar honey"]);
        let sim = model.doc_vector(0).cosine(model.doc_vector(1));
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let model = fit(&["tomato"]);
        let zero = model.transform("");
        assert_eq!(zero.cosine(model.doc_vector(0)), 0.0);
        assert_eq!(model.doc_vector(0).cosine(&zero), 0.0);
    }

    #[test]
    fn test_cosine_in_unit_interval() {
        let model = fit(&[
            "tomato onion salt pepper",
            "tomato salt",
            "onion pepper chili",
        ]);
        let query = model.transform("tomato onion");
        for i in 0..model.doc_count() {
            let sim = query.cosine(model.doc_vector(i));
            assert!((0.0..=1.0).contains(&sim));
        }
    }

    #[test]
    fn test_idf_discriminates() {
        // "rice" appears everywhere, "saffron" in one document. A query for
        // both should rank the saffron document first.
        let model = fit(&["rice beans", "rice lentils", "rice saffron"]);
        let query = model.transform("rice saffron");

        let sims: Vec<f32> = (0..3)
            .map(|i| query.cosine(model.doc_vector(i)))
            .collect();
        assert!(sims[2] > sims[0]);
        assert!(sims[2] > sims[1]);
    }

    #[test]
    fn test_transform_does_not_grow_vocabulary() {
        let model = fit(&["tomato onion"]);
        let before = model.vocabulary_len();
        let _ = model.transform("garlic ginger cumin");
        assert_eq!(model.vocabulary_len(), before);
    }
}
