pub mod recognizer;

use crate::segment::{CharClass, Segments};
use recognizer::{
    first_class, is_made_by_alphanumeric, is_made_by_lower_and_digit, is_made_by_upper_and_digit,
    separated_by,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

/// A naming convention. Kebab case is the same convention as chain case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `foo_bar_1`
    Snake,
    /// `foo-bar-1`
    #[serde(alias = "kebab")]
    Chain,
    /// `fooBar1`
    Camel,
    /// `FooBar1`
    Pascal,
    /// `foobar1`
    Flat,
    /// `FOO_BAR_1`
    Upper,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown naming convention '{0}' (expected one of: snake, chain, kebab, camel, pascal, flat, upper)")]
pub struct ParseConventionError(String);

impl Convention {
    pub const ALL: [Convention; 6] = [
        Convention::Snake,
        Convention::Chain,
        Convention::Camel,
        Convention::Pascal,
        Convention::Flat,
        Convention::Upper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Convention::Snake => "snake",
            Convention::Chain => "chain",
            Convention::Camel => "camel",
            Convention::Pascal => "pascal",
            Convention::Flat => "flat",
            Convention::Upper => "upper",
        }
    }

    /// Combine already lowercased fields into one string.
    pub fn join(self, fields: &[String]) -> String {
        match self {
            Convention::Snake => fields.join("_"),
            Convention::Chain => fields.join("-"),
            Convention::Camel => fields
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    if i == 0 {
                        field.clone()
                    } else {
                        capitalize(field)
                    }
                })
                .collect(),
            Convention::Pascal => fields.iter().map(|field| capitalize(field)).collect(),
            Convention::Flat => fields.concat(),
            Convention::Upper => Convention::Snake
                .join(fields)
                .chars()
                .map(simple_upper)
                .collect(),
        }
    }

    /// Check whether `s` already follows this convention.
    ///
    /// This looks at the raw string only. Digit-initial strings are never
    /// camel, pascal, flat or upper case but may be snake or chain case.
    pub fn matches(self, s: &str) -> bool {
        match self {
            Convention::Snake => separated_by(s, '_', is_made_by_lower_and_digit),
            Convention::Chain => separated_by(s, '-', is_made_by_lower_and_digit),
            Convention::Camel => {
                first_class(s) == Some(CharClass::Lower) && is_made_by_alphanumeric(s)
            }
            Convention::Pascal => {
                first_class(s) == Some(CharClass::Upper) && is_made_by_alphanumeric(s)
            }
            Convention::Flat => {
                first_class(s) == Some(CharClass::Lower) && is_made_by_lower_and_digit(s)
            }
            Convention::Upper => {
                first_class(s) != Some(CharClass::Digit)
                    && separated_by(s, '_', is_made_by_upper_and_digit)
            }
        }
    }

    /// Convert `s` to this convention. Empty input comes back unchanged.
    pub fn convert(self, s: &str) -> String {
        if s.is_empty() {
            return String::new();
        }

        let fields = split_to_lower_fields(s);
        let converted = self.join(&fields);
        trace!(convention = %self, input = s, ?fields, output = %converted, "converted identifier");
        converted
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = ParseConventionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let key = match lowered.strip_suffix("case") {
            Some(stem) => stem.trim_end_matches(['_', '-']),
            None => lowered.as_str(),
        };

        match key {
            "snake" => Ok(Convention::Snake),
            "chain" | "kebab" => Ok(Convention::Chain),
            "camel" => Ok(Convention::Camel),
            "pascal" => Ok(Convention::Pascal),
            "flat" => Ok(Convention::Flat),
            "upper" => Ok(Convention::Upper),
            _ => Err(ParseConventionError(s.to_string())),
        }
    }
}

/// Uppercase the first character and keep the rest as is.
fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(field.len());
            out.push(simple_upper(first));
            out.push_str(chars.as_str());
            out
        }
    }
}

/// One-to-one uppercase mapping.
///
/// Characters whose full mapping expands (`ß` -> `SS`, `ŉ` -> `ʼN`) have no
/// single-character uppercase and are kept as they are.
fn simple_upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => ch,
    }
}

/// One-to-one lowercase mapping.
///
/// The only expanding lowercase mapping is `İ` -> `i` + U+0307, whose
/// simple mapping is its first character.
fn simple_lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn to_simple_lowercase(field: &str) -> String {
    field.chars().map(simple_lower).collect()
}

/// Break `s` into lowercased words.
///
/// Whitespace, `_` and `-` act as separators and never appear in the
/// result; doubled or leading separators simply produce nothing. Every
/// remaining piece is run through the segmenter.
pub fn split_to_lower_fields(s: &str) -> Vec<String> {
    s.split_whitespace()
        .flat_map(|word| word.split('_'))
        .flat_map(|piece| piece.split('-'))
        .flat_map(Segments::new)
        .map(to_simple_lowercase)
        .collect()
}

/// All conventions `s` already satisfies, in [`Convention::ALL`] order.
pub fn detect(s: &str) -> Vec<Convention> {
    Convention::ALL
        .into_iter()
        .filter(|convention| convention.matches(s))
        .collect()
}

pub fn to_snake_case(s: &str) -> String {
    Convention::Snake.convert(s)
}

pub fn is_snake_case(s: &str) -> bool {
    Convention::Snake.matches(s)
}

pub fn to_chain_case(s: &str) -> String {
    Convention::Chain.convert(s)
}

pub fn is_chain_case(s: &str) -> bool {
    Convention::Chain.matches(s)
}

/// Same as [`to_chain_case`].
pub fn to_kebab_case(s: &str) -> String {
    to_chain_case(s)
}

/// Same as [`is_chain_case`].
pub fn is_kebab_case(s: &str) -> bool {
    is_chain_case(s)
}

pub fn to_camel_case(s: &str) -> String {
    Convention::Camel.convert(s)
}

pub fn is_camel_case(s: &str) -> bool {
    Convention::Camel.matches(s)
}

pub fn to_pascal_case(s: &str) -> String {
    Convention::Pascal.convert(s)
}

pub fn is_pascal_case(s: &str) -> bool {
    Convention::Pascal.matches(s)
}

pub fn to_flat_case(s: &str) -> String {
    Convention::Flat.convert(s)
}

pub fn is_flat_case(s: &str) -> bool {
    Convention::Flat.matches(s)
}

pub fn to_upper_case(s: &str) -> String {
    Convention::Upper.convert(s)
}

pub fn is_upper_case(s: &str) -> bool {
    Convention::Upper.matches(s)
}
