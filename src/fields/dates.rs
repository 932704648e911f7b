//! Date rules and date-range parsing.

use crate::model::TextAtom;
use crate::scoring::patterns::{
    tokens, MONTHS, MONTH_ABBREVIATIONS, PRESENT, SEASONS, TO_WORD, YEAR,
};
use crate::scoring::{Feature, Rule};

/// Literal range delimiters in priority order; "to" is handled separately.
const RANGE_DELIMITERS: &[&str] = &[" - ", "-", "\u{2013}", "\u{2014}"];

/// Rules that pick the date line of an entry.
pub fn date_rules() -> Vec<Rule> {
    vec![
        Rule::new(Feature::Pattern(&YEAR), 2),
        Rule::new(
            Feature::Custom {
                name: "month",
                predicate: has_month,
            },
            2,
        ),
        Rule::new(Feature::AnyToken(SEASONS), 1),
        Rule::new(Feature::Pattern(&PRESENT), 2),
        Rule::new(Feature::HasComma, -1),
    ]
}

/// Whether a token names a month, in full or abbreviated.
pub fn has_month(atom: &TextAtom) -> bool {
    tokens(&atom.text).any(|t| {
        MONTHS.iter().any(|m| t.eq_ignore_ascii_case(m))
            || MONTH_ABBREVIATIONS.iter().any(|m| t.eq_ignore_ascii_case(m))
    })
}

/// Whether an atom reads like a date (a year, month or "Present").
pub fn looks_like_date(atom: &TextAtom) -> bool {
    YEAR.is_match(&atom.text) || PRESENT.is_match(&atom.text) || has_month(atom)
}

/// Split a date range into `(start, end)`.
///
/// The first delimiter found splits the text; otherwise the years it
/// contains decide: two give start and end, one gives the start (with end
/// "Present" if the text says so), none leaves the raw text as start.
pub fn parse_date_range(text: &str) -> (String, String) {
    let text = text.trim();
    if text.is_empty() {
        return (String::new(), String::new());
    }

    for delimiter in RANGE_DELIMITERS {
        if text.contains(delimiter) {
            let mut parts = text.split(delimiter);
            return range_parts(parts.next(), parts.next());
        }
    }
    if TO_WORD.is_match(text) {
        let mut parts = TO_WORD.split(text);
        return range_parts(parts.next(), parts.next());
    }

    let years: Vec<&str> = YEAR.find_iter(text).map(|m| m.as_str()).collect();
    match years.as_slice() {
        [start, end, ..] => (start.to_string(), end.to_string()),
        [start] if text.to_lowercase().contains("present") => {
            (start.to_string(), "Present".to_string())
        }
        [start] => (start.to_string(), String::new()),
        [] => (text.to_string(), String::new()),
    }
}

fn range_parts(start: Option<&str>, end: Option<&str>) -> (String, String) {
    (
        start.unwrap_or_default().trim().to_string(),
        end.unwrap_or_default().trim().to_string(),
    )
}
