pub mod tokenizer;

use crate::convention::{detect, Convention};
use crate::{CheckResult, Config, Finding};
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub struct ConventionChecker {
    expected: Convention,
    ignore_patterns: Vec<Regex>,
    min_length: usize,
}

impl ConventionChecker {
    pub fn new(expected: Convention, config: &Config) -> Self {
        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => warn!("Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Self {
            expected,
            ignore_patterns,
            min_length: config.min_length,
        }
    }

    pub fn expected(&self) -> Convention {
        self.expected
    }

    /// Report every identifier in `content` that breaks the expected convention.
    pub fn check_str(&self, content: &str) -> Vec<Finding> {
        let allow_hyphen = self.expected == Convention::Chain;

        tokenizer::identifiers(content, allow_hyphen)
            .into_iter()
            .filter(|token| !self.should_ignore(token.text))
            .filter(|token| !self.expected.matches(token.text))
            .map(|token| Finding {
                identifier: token.text.to_string(),
                line: token.line,
                column: token.column,
                detected: detect(token.text),
                suggestion: self.expected.convert(token.text),
            })
            .collect()
    }

    pub fn check_file(&self, file_path: &Path) -> Result<CheckResult> {
        let bytes = fs::read(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
        // Invalid bytes become U+FFFD, which never joins an identifier
        let content = String::from_utf8_lossy(&bytes);

        let findings = self.check_str(&content);
        debug!(
            file = %file_path.display(),
            findings = findings.len(),
            expected = %self.expected,
            "checked file"
        );

        Ok(CheckResult {
            file: file_path.to_path_buf(),
            findings,
        })
    }

    fn should_ignore(&self, identifier: &str) -> bool {
        if identifier.chars().count() < self.min_length {
            return true;
        }

        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.is_match(identifier))
    }
}

/// Expand directories into the regular files below them.
///
/// Hidden entries below a directory argument are skipped; files named
/// explicitly are always kept.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));
        for entry in walker {
            let entry =
                entry.with_context(|| format!("Failed to walk directory: {}", path.display()))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(expected: Convention) -> ConventionChecker {
        ConventionChecker::new(expected, &Config::default())
    }

    #[test]
    fn test_check_str_reports_mismatches() {
        let findings = checker(Convention::Snake).check_str("fn parseHTTPHeader(raw_input: &str) {}");

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.identifier, "parseHTTPHeader");
        assert_eq!((finding.line, finding.column), (1, 4));
        assert_eq!(finding.detected, vec![Convention::Camel]);
        assert_eq!(finding.suggestion, "parse_http_header");
    }

    #[test]
    fn test_short_and_ignored_identifiers() {
        let config = Config {
            ignore_patterns: vec!["^Vec$".to_string(), "(".to_string()],
            ..Default::default()
        };
        let checker = ConventionChecker::new(Convention::Snake, &config);
        let findings = checker.check_str("let X: Vec<u8> = Y;");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_chain_keeps_hyphenated_words() {
        let findings = checker(Convention::Chain).check_str("max-width: 10px;\nfontSize: 2em;");
        let idents: Vec<_> = findings.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(idents, vec!["fontSize"]);
        assert_eq!(findings[0].suggestion, "font-size");
    }

    #[test]
    fn test_check_file_and_collect() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "def fetchUser(): pass\n").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git").join("HEAD"), "refName\n").unwrap();

        let files = collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files, vec![dir.path().join("a.py")]);

        let result = checker(Convention::Snake).check_file(&files[0]).unwrap();
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].suggestion, "fetch_user");
    }

    #[test]
    fn test_check_file_with_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"def fetchUser(): pass\n# caf\xe9 au lait\nuserName = 1\n").unwrap();

        let result = checker(Convention::Snake).check_file(&path).unwrap();
        let found: Vec<_> = result
            .findings
            .iter()
            .map(|f| (f.identifier.as_str(), f.line))
            .collect();
        assert_eq!(found, vec![("fetchUser", 1), ("userName", 3)]);
    }

    #[test]
    fn test_collect_missing_path() {
        assert!(collect_files(&[PathBuf::from("/nonexistent/nameconv")]).is_err());
    }
}
