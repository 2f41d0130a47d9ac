//! Structural identifier segmentation.
//!
//! A string is cut into fields wherever the character class changes, with
//! two refinements: an uppercase run followed by lowercase letters gives up
//! its last letter to the following word ("PDFLoader" -> "PDF", "Loader"),
//! and an uppercase letter directly followed by lowercase never starts a
//! new field on its own.

use std::iter::Peekable;
use std::str::CharIndices;
use unicode_general_category::{get_general_category, GeneralCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    /// Whitespace, punctuation, symbols, marks and uncased letters.
    Other,
}

impl CharClass {
    /// Classify by general category: Lu, Ll and Nd only.
    ///
    /// Modifier letters (`ⁿ`), circled letters (`Ⓐ`), superscripts and
    /// fractions (`²`, `½`) and titlecase letters are all `Other`.
    pub fn of(ch: char) -> Self {
        match get_general_category(ch) {
            GeneralCategory::LowercaseLetter => CharClass::Lower,
            GeneralCategory::UppercaseLetter => CharClass::Upper,
            GeneralCategory::DecimalNumber => CharClass::Digit,
            _ => CharClass::Other,
        }
    }
}

/// Whether a field boundary falls between `prev` and `cur`.
///
/// `next` is the class of the character after `cur`, if any.
fn is_boundary(prev: CharClass, cur: CharClass, next: Option<CharClass>) -> bool {
    match (prev, cur) {
        // The capital already opened the word: "Loader", "Bottles"
        (CharClass::Upper, CharClass::Lower) => false,
        // "PDFLoader": cut before the "L" so it leads "Loader"
        (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
        (prev, cur) => prev != cur,
    }
}

/// Lazy iterator over the fields of a string.
///
/// Every yielded slice borrows from the input and the slices tile it
/// exactly, in order.
pub struct Segments<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn field_end(rest: &str) -> usize {
        let mut chars: Peekable<CharIndices<'_>> = rest.char_indices().peekable();
        let mut prev = match chars.next() {
            Some((_, ch)) => CharClass::of(ch),
            None => return 0,
        };

        while let Some((idx, ch)) = chars.next() {
            let cur = CharClass::of(ch);
            let next = chars.peek().map(|&(_, c)| CharClass::of(c));
            if is_boundary(prev, cur, next) {
                return idx;
            }
            prev = cur;
        }

        rest.len()
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.src.len() {
            return None;
        }

        let rest = &self.src[self.pos..];
        let end = Self::field_end(rest);
        self.pos += end;
        Some(&rest[..end])
    }
}

/// Split a string into its fields.
///
/// Empty input yields no fields. Concatenating the result always gives back
/// the input.
///
/// ```
/// use nameconv::segment::segment;
/// assert_eq!(segment("PDFLoader"), vec!["PDF", "Loader"]);
/// assert_eq!(segment("GL11Version"), vec!["GL", "11", "Version"]);
/// assert!(segment("").is_empty());
/// ```
pub fn segment(input: &str) -> Vec<&str> {
    Segments::new(input).collect()
}

/// Split raw bytes into fields without failing on bad encodings.
///
/// The valid UTF-8 prefix is segmented like [`segment`]; everything from
/// the first undecodable byte onward is returned as one opaque trailing
/// field. This differs from returning the whole input as a single field:
/// `b"BadUTF8\xe2\xe2\xa1"` still yields `Bad`, `UTF` and `8` first.
pub fn segment_bytes(input: &[u8]) -> Vec<&[u8]> {
    let valid_up_to = match std::str::from_utf8(input) {
        Ok(s) => return segment(s).into_iter().map(str::as_bytes).collect(),
        Err(e) => e.valid_up_to(),
    };

    let (head, tail) = input.split_at(valid_up_to);
    let mut fields: Vec<&[u8]> = match std::str::from_utf8(head) {
        Ok(s) => segment(s).into_iter().map(str::as_bytes).collect(),
        Err(_) => return vec![input],
    };
    fields.push(tail);
    fields
}
