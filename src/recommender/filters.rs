//! Constraint filter pipeline.
//!
//! A cascade of pure stages (taste, course, dietary) over the
//! overlap-positive candidate set. Constraints are best-effort preferences:
//! the taste stage keeps its effect only if enough candidates survive, and
//! a final fallback reverts to the unfiltered overlap-positive set whenever
//! the cascade leaves fewer than `min_keep` candidates.

use crate::dataset::models::Recipe;
use crate::recommender::score::Candidate;

/// Soft constraints attached to a recommendation request. All fields
/// optional; absent or empty values disable the corresponding stage.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub taste: Option<String>,
    pub course: Option<String>,
    pub dietary: Option<String>,
    /// Accepted by the request contract but intentionally not applied to
    /// filtering. Kept so the contract round-trips unchanged.
    pub max_time: Option<String>,
}

/// Ingredient keywords that indicate meat content.
const MEAT_KEYWORDS: &[&str] = &["fish", "chicken", "prawns"];

/// Indicator keywords per recognized taste label. Unknown labels map to an
/// empty slice, which makes the taste stage a no-op.
fn taste_keywords(taste: &str) -> &'static [&'static str] {
    match taste {
        "sweet" => &["sugar", "honey", "chocolate"],
        "sour" => &["lemon", "vinegar", "lime"],
        "spicy" => &["chili", "pepper", "paprika"],
        _ => &[],
    }
}

fn ingredients_contain(recipe: &Recipe, keywords: &[&str]) -> bool {
    let haystack = recipe.ingredients_raw.to_lowercase();
    keywords.iter().any(|k| haystack.contains(k))
}

/// Base set for the cascade: candidates sharing at least one ingredient
/// with the query.
pub fn with_overlap(candidates: &[Candidate]) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| c.overlap > 0)
        .cloned()
        .collect()
}

/// Taste stage. Keeps recipes whose raw ingredient text contains one of the
/// taste's indicator keywords, but only if at least `min_keep` candidates
/// survive; otherwise the stage has no effect.
pub fn taste_stage(
    corpus: &[Recipe],
    candidates: Vec<Candidate>,
    taste: &str,
    min_keep: usize,
) -> Vec<Candidate> {
    let keywords = taste_keywords(taste);
    if keywords.is_empty() {
        return candidates;
    }

    let filtered: Vec<Candidate> = candidates
        .iter()
        .filter(|c| ingredients_contain(&corpus[c.index], keywords))
        .cloned()
        .collect();

    if filtered.len() >= min_keep {
        filtered
    } else {
        candidates
    }
}

/// Course stage: exact case-insensitive match. No survivor guard; this
/// stage may legitimately empty the set.
pub fn course_stage(corpus: &[Recipe], candidates: Vec<Candidate>, course: &str) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|c| corpus[c.index].course.eq_ignore_ascii_case(course))
        .collect()
}

/// Dietary stage: vegetarian keeps recipes without meat keywords,
/// non-vegetarian keeps recipes with them. Any other value is a no-op.
pub fn dietary_stage(
    corpus: &[Recipe],
    candidates: Vec<Candidate>,
    dietary: &str,
) -> Vec<Candidate> {
    match dietary {
        "vegetarian" => candidates
            .into_iter()
            .filter(|c| !ingredients_contain(&corpus[c.index], MEAT_KEYWORDS))
            .collect(),
        "non-vegetarian" => candidates
            .into_iter()
            .filter(|c| ingredients_contain(&corpus[c.index], MEAT_KEYWORDS))
            .collect(),
        _ => candidates,
    }
}

/// Run the full cascade over the scored candidates.
///
/// The base set is the overlap-positive candidates; if that is empty, the
/// result is empty regardless of constraints. After all stages, fewer than
/// `min_keep` survivors triggers the fallback to the base set.
pub fn apply(
    corpus: &[Recipe],
    candidates: &[Candidate],
    constraints: &Constraints,
    min_keep: usize,
) -> Vec<Candidate> {
    let base = with_overlap(candidates);
    if base.is_empty() {
        return base;
    }

    let mut working = base.clone();

    if let Some(taste) = non_empty(&constraints.taste) {
        working = taste_stage(corpus, working, &taste.to_lowercase(), min_keep);
        tracing::debug!(
            "After taste filter ({}): {} candidates",
            taste,
            working.len()
        );
    }

    if let Some(course) = non_empty(&constraints.course) {
        working = course_stage(corpus, working, course);
    }

    if let Some(dietary) = non_empty(&constraints.dietary) {
        working = dietary_stage(corpus, working, &dietary.to_lowercase());
    }

    if working.len() < min_keep {
        return base;
    }

    working
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
