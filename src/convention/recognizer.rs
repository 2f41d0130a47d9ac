// Structural predicates over raw, unsegmented strings.
//
// Recognizers are strict where the converters are lenient: an empty piece
// between separators ("foo__bar", "_foo", "foo_") never matches.

use crate::segment::CharClass;

fn made_of(s: &str, allowed: impl Fn(CharClass) -> bool) -> bool {
    !s.is_empty() && s.chars().all(|ch| allowed(CharClass::of(ch)))
}

pub(crate) fn is_made_by_lower_and_digit(s: &str) -> bool {
    made_of(s, |class| matches!(class, CharClass::Lower | CharClass::Digit))
}

pub(crate) fn is_made_by_upper_and_digit(s: &str) -> bool {
    made_of(s, |class| matches!(class, CharClass::Upper | CharClass::Digit))
}

pub(crate) fn is_made_by_alphanumeric(s: &str) -> bool {
    made_of(s, |class| class != CharClass::Other)
}

pub(crate) fn first_class(s: &str) -> Option<CharClass> {
    s.chars().next().map(CharClass::of)
}

/// Every `sep`-delimited piece is non-empty and accepted by `piece`.
///
/// Without `sep` in the string this checks the whole string as one piece.
pub(crate) fn separated_by(s: &str, sep: char, piece: impl Fn(&str) -> bool) -> bool {
    s.split(sep).all(piece)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_never_matches() {
        assert!(!is_made_by_lower_and_digit(""));
        assert!(!is_made_by_upper_and_digit(""));
        assert!(!is_made_by_alphanumeric(""));
        assert!(!separated_by("", '_', is_made_by_lower_and_digit));
    }

    #[test]
    fn test_first_class() {
        assert_eq!(first_class(""), None);
        assert_eq!(first_class("1a"), Some(CharClass::Digit));
        assert_eq!(first_class("Éa"), Some(CharClass::Upper));
    }

    #[test]
    fn test_separated_pieces() {
        assert!(separated_by("foo_bar_1", '_', is_made_by_lower_and_digit));
        assert!(separated_by("foobar", '_', is_made_by_lower_and_digit));
        assert!(!separated_by("foo__bar", '_', is_made_by_lower_and_digit));
        assert!(!separated_by("_foo", '_', is_made_by_lower_and_digit));
        assert!(!separated_by("foo_", '_', is_made_by_lower_and_digit));
        assert!(separated_by("FOO_1", '_', is_made_by_upper_and_digit));
    }
}
