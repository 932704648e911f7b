//! Text atoms: the smallest positioned, styled runs of extracted text.

use serde::{Deserialize, Serialize};

/// A run of characters sharing one font and one baseline.
///
/// Coordinates are in PDF user space: `y` grows towards the top of the page,
/// so larger `y` means earlier in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAtom {
    /// The text content
    pub text: String,
    /// Left edge
    pub x1: f32,
    /// Right edge
    pub x2: f32,
    /// Baseline
    pub y: f32,
    /// Page number (1-indexed)
    pub page: u32,
    /// Whether the run's font name marks it as bold
    pub bold: bool,
}

impl TextAtom {
    /// Create a new text atom.
    pub fn new(text: impl Into<String>, x1: f32, x2: f32, y: f32, page: u32, bold: bool) -> Self {
        Self {
            text: text.into(),
            x1,
            x2,
            y,
            page,
            bold,
        }
    }

    /// Horizontal extent of the run.
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Whether both atoms sit on the same visual line.
    pub fn same_line(&self, other: &TextAtom, tolerance: f32) -> bool {
        self.page == other.page && (self.y - other.y).abs() <= tolerance
    }

    /// Whether `next` starts to the right of this atom on the same line.
    pub fn is_adjacent_to(&self, next: &TextAtom, tolerance: f32) -> bool {
        self.same_line(next, tolerance) && self.x2 < next.x1
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Check if a font name marks a bold face.
///
/// Deliberately simple: a font whose embedded name omits "bold" (for example
/// "Helvetica-Black") is read as regular weight.
pub fn is_bold_font(font_name: &str) -> bool {
    font_name.to_lowercase().contains("bold")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_font_detection() {
        assert!(is_bold_font("Helvetica-Bold"));
        assert!(is_bold_font("ABCDEF+OpenSans-SemiBOLD"));
        assert!(!is_bold_font("Helvetica-Oblique"));
        assert!(!is_bold_font("Helvetica-Black"));
    }

    #[test]
    fn test_adjacency() {
        let a = TextAtom::new("Jane", 10.0, 40.0, 700.0, 1, true);
        let b = TextAtom::new("Doe", 45.0, 70.0, 701.5, 1, true);
        let c = TextAtom::new("Doe", 45.0, 70.0, 701.5, 2, true);
        let d = TextAtom::new("Doe", 45.0, 70.0, 690.0, 1, true);

        assert!(a.is_adjacent_to(&b, 2.0));
        assert!(!b.is_adjacent_to(&a, 2.0));
        assert!(!a.is_adjacent_to(&c, 2.0));
        assert!(!a.is_adjacent_to(&d, 2.0));
    }

    #[test]
    fn test_word_count_and_width() {
        let atom = TextAtom::new("  Built  distributed systems ", 0.0, 120.0, 0.0, 1, false);
        assert_eq!(atom.word_count(), 3);
        assert!((atom.width() - 120.0).abs() < f32::EPSILON);
    }
}
