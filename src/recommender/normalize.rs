//! Ingredient text normalization.
//!
//! The same treatment is applied to corpus rows at load time and to user
//! queries at request time, so vocabulary and overlap comparisons stay
//! symmetric.

use std::collections::BTreeSet;

/// Split comma-separated ingredient text into lowercase, trimmed terms,
/// dropping empty segments. Order is preserved.
pub fn terms(text: &str) -> Vec<String> {
    text.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The set of ingredient phrases in a raw ingredient string.
pub fn token_set(text: &str) -> BTreeSet<String> {
    terms(text).into_iter().collect()
}

/// The normalized form the term-weight model is fit on: comma-split terms
/// rejoined with single spaces.
pub fn joined(text: &str) -> String {
    terms(text).join(" ")
}

/// Normalize a user's ingredient list: lowercase, trim, drop empties.
pub fn query_tokens(available: &[String]) -> BTreeSet<String> {
    available
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_splits_trims_lowercases() {
        assert_eq!(
            terms("Tomato, Onion , SALT"),
            vec!["tomato", "onion", "salt"]
        );
    }

    #[test]
    fn test_terms_drops_empty_segments() {
        assert_eq!(terms("tomato,, ,onion"), vec!["tomato", "onion"]);
        assert!(terms("").is_empty());
        assert!(terms(" , ,").is_empty());
    }

    #[test]
    fn test_joined() {
        assert_eq!(joined("Tomato, Red Onion"), "tomato red onion");
        assert_eq!(joined(""), "");
    }

    #[test]
    fn test_token_set_deduplicates() {
        let set = token_set("salt, Salt, SALT");
        assert_eq!(set.len(), 1);
        assert!(set.contains("salt"));
    }

    #[test]
    fn test_query_tokens() {
        let query = vec![
            " Tomato ".to_string(),
            "".to_string(),
            "onion".to_string(),
        ];
        let tokens = query_tokens(&query);
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("tomato"));
        assert!(tokens.contains("onion"));
    }
}
