//! Lines: atoms judged to lie on the same visual row of a page.

use serde::{Deserialize, Serialize};

use super::TextAtom;

/// A visual line, atoms ordered left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    atoms: Vec<TextAtom>,
    text: String,
}

impl Line {
    /// Build a line from atoms that share a baseline.
    ///
    /// Atoms are re-sorted by their left edge; the line text joins the
    /// trimmed atom texts with single spaces.
    pub fn from_atoms(mut atoms: Vec<TextAtom>) -> Self {
        atoms.sort_by(|a, b| a.x1.total_cmp(&b.x1));

        let text = atoms
            .iter()
            .map(|a| a.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self { atoms, text }
    }

    /// The atoms of this line, left to right.
    pub fn atoms(&self) -> &[TextAtom] {
        &self.atoms
    }

    /// Consume the line, returning its atoms.
    pub fn into_atoms(self) -> Vec<TextAtom> {
        self.atoms
    }

    /// The joined line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Baseline of the first atom.
    pub fn y(&self) -> f32 {
        self.atoms.first().map(|a| a.y).unwrap_or(0.0)
    }

    /// Page of the line.
    pub fn page(&self) -> u32 {
        self.atoms.first().map(|a| a.page).unwrap_or(0)
    }

    /// Whether the line has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the first atom is bold.
    pub fn starts_bold(&self) -> bool {
        self.atoms.first().map(|a| a.bold).unwrap_or(false)
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// A lone bold atom written in capitals, the usual shape of a heading.
    pub fn is_section_title_candidate(&self) -> bool {
        if self.atoms.len() != 1 || !self.atoms[0].bold {
            return false;
        }
        let mut letters = self.text.chars().filter(|c| c.is_alphabetic()).peekable();
        letters.peek().is_some() && letters.all(|c| c.is_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(text: &str, x1: f32, bold: bool) -> TextAtom {
        TextAtom::new(text, x1, x1 + 10.0 * text.len() as f32, 700.0, 1, bold)
    }

    #[test]
    fn test_from_atoms_sorts_and_joins() {
        let line = Line::from_atoms(vec![atom("Doe", 80.0, false), atom("Jane ", 20.0, false)]);
        assert_eq!(line.text(), "Jane Doe");
        assert_eq!(line.atoms()[0].text, "Jane ");
        assert!((line.y() - 700.0).abs() < f32::EPSILON);
        assert_eq!(line.page(), 1);
    }

    #[test]
    fn test_section_title_candidate() {
        assert!(Line::from_atoms(vec![atom("EXPERIENCE", 0.0, true)]).is_section_title_candidate());
        assert!(!Line::from_atoms(vec![atom("Experience", 0.0, true)]).is_section_title_candidate());
        assert!(!Line::from_atoms(vec![atom("EXPERIENCE", 0.0, false)]).is_section_title_candidate());
        assert!(!Line::from_atoms(vec![atom("2019", 0.0, true)]).is_section_title_candidate());
        assert!(!Line::from_atoms(vec![atom("WORK", 0.0, true), atom("HISTORY", 90.0, true)])
            .is_section_title_candidate());
    }

    #[test]
    fn test_empty_line() {
        let line = Line::from_atoms(Vec::new());
        assert!(line.is_blank());
        assert!(!line.starts_bold());
        assert_eq!(line.page(), 0);
    }
}
