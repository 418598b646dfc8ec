//! Identifier validation

/// Check whether a raw token is a well-formed identifier.
///
/// A valid identifier is non-empty, starts with a Unicode letter, and
/// continues with letters, digits, hyphens, or underscores.
///
/// This predicate gates `Lookup` evaluation only. The binding operations
/// (define, assign, remove) accept any token the environment will store,
/// so a malformed name can be bound and only fails when *read*.
pub fn is_valid_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            chars.all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names_are_valid() {
        assert!(is_valid_identifier("a"));
        assert!(is_valid_identifier("counter"));
        assert!(is_valid_identifier("x2"));
        assert!(is_valid_identifier("long-name_3"));
    }

    #[test]
    fn test_unicode_letters_are_valid() {
        assert!(is_valid_identifier("λ"));
        assert!(is_valid_identifier("größe"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_leading_non_letter_is_invalid() {
        assert!(!is_valid_identifier("1x"));
        assert!(!is_valid_identifier("-a"));
        assert!(!is_valid_identifier("_a"));
        assert!(!is_valid_identifier(" a"));
    }

    #[test]
    fn test_bad_interior_characters_are_invalid() {
        assert!(!is_valid_identifier("a b"));
        assert!(!is_valid_identifier("a.b"));
        assert!(!is_valid_identifier("a!"));
    }
}
