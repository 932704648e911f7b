//! Weighted-rule scoring: pick one field value from candidate atoms.
//!
//! Every candidate gets the sum of the weights of the rules it matches.
//! The highest total wins, first occurrence breaking ties.

mod features;
pub mod patterns;

pub use features::Feature;

use crate::model::TextAtom;

/// A weighted feature.
#[derive(Debug, Clone)]
pub struct Rule {
    pub feature: Feature,
    pub weight: i32,
    /// The feature identifies the value itself rather than hinting at it
    pub exact_match: bool,
}

impl Rule {
    /// A hinting rule.
    pub fn new(feature: Feature, weight: i32) -> Self {
        Self {
            feature,
            weight,
            exact_match: false,
        }
    }

    /// A rule whose match identifies the value.
    pub fn exact(feature: Feature, weight: i32) -> Self {
        Self {
            feature,
            weight,
            exact_match: true,
        }
    }
}

/// Selection policy when the best score is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Return the best candidate regardless of its score
    #[default]
    Permissive,
    /// Return empty text unless the best score is positive
    Strict,
}

/// Score of one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Score<'a> {
    pub atom: &'a TextAtom,
    pub score: i32,
    pub exact_match: bool,
}

/// Score every candidate against the rules.
pub fn score<'a>(candidates: &'a [TextAtom], rules: &[Rule]) -> Vec<Score<'a>> {
    candidates
        .iter()
        .map(|atom| {
            rules
                .iter()
                .filter(|rule| rule.feature.matches(atom))
                .fold(
                    Score {
                        atom,
                        score: 0,
                        exact_match: false,
                    },
                    |mut acc, rule| {
                        acc.score += rule.weight;
                        acc.exact_match |= rule.exact_match;
                        acc
                    },
                )
        })
        .collect()
}

/// The winning candidate, if the mode accepts it.
pub fn best<'a>(candidates: &'a [TextAtom], rules: &[Rule], mode: Mode) -> Option<Score<'a>> {
    let mut winner: Option<Score<'a>> = None;
    for s in score(candidates, rules) {
        // strictly greater keeps the first of equal scores
        if winner.as_ref().map_or(true, |w| s.score > w.score) {
            winner = Some(s);
        }
    }

    let winner = winner?;
    log::trace!(
        "selected {:?} with score {}",
        winner.atom.text,
        winner.score
    );
    match mode {
        Mode::Strict if winner.score <= 0 => None,
        _ => Some(winner),
    }
}

/// Text of the winning candidate, or empty text.
pub fn select(candidates: &[TextAtom], rules: &[Rule], mode: Mode) -> String {
    best(candidates, rules, mode)
        .map(|s| s.atom.text.trim().to_string())
        .unwrap_or_default()
}

/// Like [`select`], but when the winner matched an exact pattern rule only
/// the matched part of its text is returned.
pub fn select_exact(candidates: &[TextAtom], rules: &[Rule], mode: Mode) -> String {
    let Some(winner) = best(candidates, rules, mode) else {
        return String::new();
    };

    let text = winner.atom.text.as_str();
    if winner.exact_match {
        for rule in rules.iter().filter(|r| r.exact_match && r.weight > 0) {
            if let Feature::Pattern(re) = &rule.feature {
                if let Some(m) = re.find(text) {
                    return m.as_str().trim().to_string();
                }
            }
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::patterns::EMAIL;

    fn atoms(texts: &[&str]) -> Vec<TextAtom> {
        texts
            .iter()
            .map(|t| TextAtom::new(*t, 0.0, 100.0, 700.0, 1, false))
            .collect()
    }

    #[test]
    fn test_empty_candidates() {
        let rules = vec![Rule::new(Feature::HasComma, 1)];
        assert_eq!(select(&[], &rules, Mode::Permissive), "");
        assert_eq!(select(&[], &rules, Mode::Strict), "");
    }

    #[test]
    fn test_single_rule_picks_match() {
        let candidates = atoms(&["Jane", "Austin, TX", "Engineer"]);
        let rules = vec![Rule::new(Feature::HasComma, 3)];
        assert_eq!(select(&candidates, &rules, Mode::Strict), "Austin, TX");
    }

    #[test]
    fn test_strict_rejects_zero() {
        let candidates = atoms(&["Jane", "Engineer"]);
        let rules = vec![Rule::new(Feature::HasComma, 3)];
        assert_eq!(select(&candidates, &rules, Mode::Strict), "");
        assert_eq!(select(&candidates, &rules, Mode::Permissive), "Jane");
    }

    #[test]
    fn test_ties_go_to_first() {
        let candidates = atoms(&["a, b", "c, d"]);
        let rules = vec![Rule::new(Feature::HasComma, 1)];
        assert_eq!(select(&candidates, &rules, Mode::Strict), "a, b");
    }

    #[test]
    fn test_scores_sum_and_flag_exact() {
        let candidates = atoms(&["jane@x.io, remote", "plain"]);
        let rules = vec![
            Rule::exact(Feature::Pattern(&EMAIL), 4),
            Rule::new(Feature::HasComma, -2),
        ];
        let scores = score(&candidates, &rules);
        assert_eq!(scores[0].score, 2);
        assert!(scores[0].exact_match);
        assert_eq!(scores[1].score, 0);
        assert!(!scores[1].exact_match);
    }

    #[test]
    fn test_select_exact_returns_matched_part() {
        let candidates = atoms(&["Email: jane@example.com"]);
        let rules = vec![Rule::exact(Feature::Pattern(&EMAIL), 4)];
        assert_eq!(
            select_exact(&candidates, &rules, Mode::Strict),
            "jane@example.com"
        );
        assert_eq!(
            select(&candidates, &rules, Mode::Strict),
            "Email: jane@example.com"
        );
    }

    #[test]
    fn test_candidates_are_not_mutated() {
        let candidates = atoms(&["x"]);
        let before = candidates.clone();
        let _ = select(&candidates, &[Rule::new(Feature::Bold, 1)], Mode::Permissive);
        assert_eq!(candidates, before);
    }
}
