//! Plain-text outline of a document's sections and subsections.

use std::fmt::Write;

use crate::assemble::Layout;
use crate::layout::split_subsections;
use crate::options::ParseOptions;

/// List every section with its subsections, one line per text line.
///
/// Subsections are separated by a blank line; headers are not repeated
/// since the classifier consumes them.
pub fn to_outline(layout: &Layout, options: &ParseOptions) -> String {
    let mut out = String::new();

    for section in &layout.sections {
        let _ = writeln!(out, "[{}] {} lines", section.tag, section.lines.len());
        let subsections = split_subsections(
            &section.lines,
            options.subsection_gap_ratio,
            options.default_line_gap,
        );
        for (i, subsection) in subsections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for line in subsection.iter() {
                let _ = writeln!(out, "  {}", line.text());
            }
        }
        out.push('\n');
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextAtom;

    #[test]
    fn test_outline_lists_sections() {
        let atoms = vec![
            TextAtom::new("Jane Doe", 72.0, 150.0, 700.0, 1, true),
            TextAtom::new("EDUCATION", 72.0, 150.0, 680.0, 1, true),
            TextAtom::new("Rice University", 72.0, 200.0, 668.0, 1, true),
        ];
        let options = ParseOptions::default();
        let outline = to_outline(&Layout::analyze(&atoms, &options), &options);

        assert_eq!(
            outline,
            "[profile] 1 lines\n  Jane Doe\n\n[education] 1 lines\n  Rice University"
        );
    }
}
