use crate::core::types::IngredientToken;
use std::fmt;

/// Order-independent identity of an ingredient list.
///
/// Holds the tokens sorted, so two lists compare equal iff they contain the
/// same tokens with the same multiplicities. Displays as the concatenation of
/// the sorted tokens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(Vec<IngredientToken>);

impl CanonicalKey {
    pub fn tokens(&self) -> &[IngredientToken] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}

/// Canonicalizes an ingredient list. O(n log n).
pub fn canonical_key(items: &[IngredientToken]) -> CanonicalKey {
    let mut sorted = items.to_vec();
    sorted.sort();
    CanonicalKey(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::tokens;

    #[test]
    fn test_permutations_share_a_key() {
        let a = canonical_key(&tokens(&["🍞", "🧀", "🍞"]));
        let b = canonical_key(&tokens(&["🍞", "🍞", "🧀"]));
        let c = canonical_key(&tokens(&["🧀", "🍞", "🍞"]));
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_multiplicity_changes_the_key() {
        assert_ne!(canonical_key(&tokens(&["🥚"])), canonical_key(&tokens(&["🥚", "🥚"])));
    }

    #[test]
    fn test_display_concatenates_sorted_tokens() {
        let key = canonical_key(&tokens(&["b", "a", "c", "a"]));
        assert_eq!(key.to_string(), "aabc");
    }

    #[test]
    fn test_multi_char_tokens_do_not_collide() {
        let left = canonical_key(&tokens(&["ab", "c"]));
        let right = canonical_key(&tokens(&["a", "bc"]));
        assert_eq!(left.to_string(), right.to_string());
        assert_ne!(left, right);
    }

    #[test]
    fn test_empty_input_gives_empty_key() {
        assert!(canonical_key(&[]).is_empty());
    }
}
