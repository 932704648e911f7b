//! Résumé assembly: run the field extractors and collect their output.

use crate::fields::{
    extract_educations, extract_experiences, extract_profile, extract_projects, extract_skills,
};
use crate::layout::{assemble_lines, classify_sections, raw_text};
use crate::model::{Line, ParsedResume, Sections, TextAtom};
use crate::options::ParseOptions;

/// Lines and sections of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Lines in reading order
    pub lines: Vec<Line>,
    pub sections: Sections,
}

impl Layout {
    /// Assemble lines and classify them into sections.
    pub fn analyze(atoms: &[TextAtom], options: &ParseOptions) -> Self {
        let lines = assemble_lines(atoms, options.line_tolerance);
        let sections = classify_sections(&lines, options.split_unknown_headings);
        Self { lines, sections }
    }

    /// Run every extractor over this layout.
    pub fn assemble(&self, options: &ParseOptions) -> ParsedResume {
        assemble(&self.lines, &self.sections, options)
    }
}

/// Merge the extractor outputs into one record.
///
/// `raw_text` keeps every line, headers included, in reading order.
pub fn assemble(lines: &[Line], sections: &Sections, options: &ParseOptions) -> ParsedResume {
    ParsedResume {
        profile: extract_profile(sections),
        experiences: extract_experiences(sections, options),
        educations: extract_educations(sections, options),
        skills: extract_skills(sections),
        projects: extract_projects(sections, options),
        raw_text: raw_text(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let options = ParseOptions::default();
        let layout = Layout::analyze(&[], &options);
        let resume = layout.assemble(&options);

        assert!(layout.lines.is_empty());
        assert!(resume.is_empty());
        assert_eq!(resume.raw_text, "");
    }

    #[test]
    fn test_raw_text_keeps_headers() {
        let atoms = vec![
            TextAtom::new("Jane Doe", 72.0, 150.0, 700.0, 1, true),
            TextAtom::new("SKILLS", 72.0, 130.0, 680.0, 1, true),
            TextAtom::new("Rust, Go", 72.0, 140.0, 668.0, 1, false),
        ];
        let options = ParseOptions::default();
        let resume = Layout::analyze(&atoms, &options).assemble(&options);

        assert_eq!(resume.raw_text, "Jane Doe\nSKILLS\nRust, Go");
        assert_eq!(resume.profile.name, "Jane Doe");
        assert_eq!(resume.skills.skills, vec!["Rust", "Go"]);
    }
}
