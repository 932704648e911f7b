//! Feature predicates over text atoms.

use regex::Regex;

use super::patterns::{contains_any_token, BARE_DECIMAL};
use crate::model::TextAtom;

/// A testable property of a candidate atom.
#[derive(Debug, Clone)]
pub enum Feature {
    /// Set in a bold face
    Bold,
    /// Has letters and none of them lowercase
    AllUppercase,
    /// Contains an ASCII letter
    HasLetter,
    /// Contains an ASCII digit
    HasNumber,
    HasComma,
    /// Contains this text; an empty needle never matches
    Contains(String),
    /// The regex finds a match somewhere in the text
    Pattern(&'static Regex),
    /// One of the words appears as a whole token (case-insensitive)
    AnyToken(&'static [&'static str]),
    /// One of the strings appears anywhere, case preserved
    AnySubstring(&'static [&'static str]),
    /// At least this many words
    MinWords(usize),
    /// Strictly more than this many words
    MoreWordsThan(usize),
    /// The whole text is a number in `(0, max]`
    DecimalAtMost(f32),
    /// Escape hatch for one-off predicates
    Custom {
        name: &'static str,
        predicate: fn(&TextAtom) -> bool,
    },
}

impl Feature {
    /// Test the feature against an atom.
    pub fn matches(&self, atom: &TextAtom) -> bool {
        let text = atom.text.as_str();
        match self {
            Feature::Bold => atom.bold,
            Feature::AllUppercase => {
                text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
            }
            Feature::HasLetter => text.chars().any(|c| c.is_ascii_alphabetic()),
            Feature::HasNumber => text.chars().any(|c| c.is_ascii_digit()),
            Feature::HasComma => text.contains(','),
            Feature::Contains(needle) => !needle.is_empty() && text.contains(needle.as_str()),
            Feature::Pattern(re) => re.is_match(text),
            Feature::AnyToken(words) => contains_any_token(text, words),
            Feature::AnySubstring(needles) => needles.iter().any(|n| text.contains(n)),
            Feature::MinWords(n) => atom.word_count() >= *n,
            Feature::MoreWordsThan(n) => atom.word_count() > *n,
            Feature::DecimalAtMost(max) => {
                let trimmed = text.trim();
                BARE_DECIMAL.is_match(trimmed)
                    && trimmed
                        .parse::<f32>()
                        .map(|v| v > 0.0 && v <= *max)
                        .unwrap_or(false)
            }
            Feature::Custom { predicate, .. } => predicate(atom),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &str {
        match self {
            Feature::Bold => "bold",
            Feature::AllUppercase => "all_uppercase",
            Feature::HasLetter => "has_letter",
            Feature::HasNumber => "has_number",
            Feature::HasComma => "has_comma",
            Feature::Contains(_) => "contains",
            Feature::Pattern(re) => re.as_str(),
            Feature::AnyToken(_) => "any_token",
            Feature::AnySubstring(_) => "any_substring",
            Feature::MinWords(_) => "min_words",
            Feature::MoreWordsThan(_) => "more_words_than",
            Feature::DecimalAtMost(_) => "decimal_at_most",
            Feature::Custom { name, .. } => *name,
        }
    }
}
