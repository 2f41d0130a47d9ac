use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"[\p{L}_][\p{L}\p{N}_]*").unwrap();
    // Chain-case names only exist where hyphens are allowed inside a word
    static ref HYPHENATED_IDENTIFIER: Regex =
        Regex::new(r"[\p{L}_][\p{L}\p{N}_]*(?:-[\p{L}\p{N}_]+)*").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// 1-indexed
    pub line: usize,
    /// 1-indexed, in characters
    pub column: usize,
}

/// Extract identifier-like tokens line by line.
///
/// Leading and trailing underscores (`_private`, `__init__`) are stripped
/// from each token; tokens made only of underscores are dropped.
pub fn identifiers(content: &str, allow_hyphen: bool) -> Vec<Token<'_>> {
    let pattern: &Regex = if allow_hyphen {
        &*HYPHENATED_IDENTIFIER
    } else {
        &*IDENTIFIER
    };

    let mut tokens = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        for m in pattern.find_iter(line) {
            let raw = m.as_str();
            let text = raw.trim_matches('_');
            if text.is_empty() {
                continue;
            }

            let leading = raw.len() - raw.trim_start_matches('_').len();
            let start = m.start() + leading;
            tokens.push(Token {
                text,
                line: line_num + 1,
                column: line[..start].chars().count() + 1,
            });
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_with_positions() {
        let tokens = identifiers("let fooBar = baz_qux;\n  self.__init__()", false);
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["let", "fooBar", "baz_qux", "self", "init"]);

        assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
        assert_eq!((tokens[4].line, tokens[4].column), (2, 10));
    }

    #[test]
    fn test_hyphen_handling() {
        let plain: Vec<_> = identifiers("max-width: 10px", false)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(plain, vec!["max", "width", "px"]);

        let hyphenated: Vec<_> = identifiers("max-width: 10px", true)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(hyphenated, vec!["max-width", "px"]);
    }

    #[test]
    fn test_unicode_columns() {
        let tokens = identifiers("é = größe", false);
        assert_eq!(tokens[1].text, "größe");
        assert_eq!(tokens[1].column, 5);
    }

    #[test]
    fn test_underscore_only_tokens_dropped() {
        assert!(identifiers("_ = __", false).is_empty());
    }
}
