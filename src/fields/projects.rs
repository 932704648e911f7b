//! Project entries.

use crate::layout::split_subsections;
use crate::model::{Line, Project, SectionTag, Sections};
use crate::options::ParseOptions;
use crate::scoring::{select, Feature, Mode, Rule};

use super::bullets::extract_bullets;
use super::dates::{date_rules, looks_like_date};
use super::{atoms_of, split_header};

pub fn extract_projects(sections: &Sections, options: &ParseOptions) -> Vec<Project> {
    split_subsections(
        sections.lines(SectionTag::Projects),
        options.subsection_gap_ratio,
        options.default_line_gap,
    )
    .into_iter()
    .filter(|lines| lines.iter().any(|l| !l.is_blank()))
    .map(project_from_lines)
    .collect()
}

/// Name and date come from the header lines, descriptions from the rest.
pub fn project_from_lines(lines: &[Line]) -> Project {
    let (header, content) = split_header(lines);
    let atoms = atoms_of(header);

    let name_rules = vec![
        Rule::new(Feature::Bold, 2),
        Rule::new(
            Feature::Custom {
                name: "date_like",
                predicate: looks_like_date,
            },
            -4,
        ),
        Rule::new(Feature::MoreWordsThan(8), -2),
    ];

    Project {
        name: select(&atoms, &name_rules, Mode::Permissive),
        date: select(&atoms, &date_rules(), Mode::Strict),
        descriptions: extract_bullets(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextAtom;

    fn line(parts: &[(&str, f32, bool)], y: f32) -> Line {
        Line::from_atoms(
            parts
                .iter()
                .map(|&(text, x1, bold)| TextAtom::new(text, x1, x1 + 150.0, y, 1, bold))
                .collect(),
        )
    }

    #[test]
    fn test_project_entry() {
        let lines = vec![
            line(&[("Ledger CLI", 72.0, true), ("Fall 2022", 400.0, false)], 700.0),
            line(&[("- Double-entry bookkeeping in Rust", 80.0, false)], 688.0),
            line(&[("- Imports bank CSV exports", 80.0, false)], 676.0),
        ];
        let project = project_from_lines(&lines);

        assert_eq!(project.name, "Ledger CLI");
        assert_eq!(project.date, "Fall 2022");
        assert_eq!(
            project.descriptions,
            vec!["Double-entry bookkeeping in Rust", "Imports bank CSV exports"]
        );
    }

    #[test]
    fn test_undated_project() {
        let lines = vec![line(&[("Home Lab", 72.0, true)], 700.0)];
        let project = project_from_lines(&lines);

        assert_eq!(project.name, "Home Lab");
        assert_eq!(project.date, "");
        assert!(project.descriptions.is_empty());
    }
}
