//! Education entries.

use crate::layout::split_subsections;
use crate::model::{Education, Line, SectionTag, Sections};
use crate::options::ParseOptions;
use crate::scoring::patterns::{DEGREES, DEGREE_INITIALS, GPA, SCHOOLS};
use crate::scoring::{select, select_exact, Feature, Mode, Rule};

use super::bullets::extract_bullets;
use super::dates::{date_rules, parse_date_range};
use super::{atoms_of, split_header};

/// One entry per subsection of the education section.
pub fn extract_educations(sections: &Sections, options: &ParseOptions) -> Vec<Education> {
    let educations: Vec<Education> = split_subsections(
        sections.lines(SectionTag::Education),
        options.subsection_gap_ratio,
        options.default_line_gap,
    )
    .into_iter()
    .filter(|lines| lines.iter().any(|l| !l.is_blank()))
    .map(education_from_lines)
    .collect();

    log::debug!("extracted {} education entries", educations.len());
    educations
}

/// Build one entry, scoring every line of the subsection.
pub fn education_from_lines(lines: &[Line]) -> Education {
    let atoms = atoms_of(lines);

    let school = select(&atoms, &school_rules(), Mode::Permissive);
    let degree = select(&atoms, &degree_rules(), Mode::Permissive);
    let gpa = select_exact(&atoms, &gpa_rules(), Mode::Strict);
    let date = select(&atoms, &date_rules(), Mode::Permissive);
    let (start_date, end_date) = parse_date_range(&date);

    let (_, content) = split_header(lines);
    Education {
        field_of_study: field_of_study(&degree),
        school,
        degree,
        gpa,
        start_date,
        end_date,
        descriptions: extract_bullets(content),
    }
}

/// The subject named after " in " (or else " of ") in a degree.
///
/// "Bachelor of Science in Physics, minor in Math" gives "Physics".
pub fn field_of_study(degree: &str) -> String {
    let rest = degree
        .split_once(" in ")
        .or_else(|| degree.split_once(" of "))
        .map(|(_, rest)| rest);

    match rest {
        Some(rest) => rest
            .split(|c: char| matches!(c, ',' | ';' | '('))
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
        None => String::new(),
    }
}

fn school_rules() -> Vec<Rule> {
    vec![
        Rule::new(Feature::AnySubstring(SCHOOLS), 4),
        Rule::new(Feature::AnySubstring(DEGREES), -4),
        Rule::new(Feature::HasNumber, -2),
    ]
}

fn degree_rules() -> Vec<Rule> {
    vec![
        Rule::new(Feature::AnySubstring(DEGREES), 4),
        Rule::new(Feature::Pattern(&DEGREE_INITIALS), 3),
        Rule::new(Feature::AnySubstring(SCHOOLS), -4),
    ]
}

fn gpa_rules() -> Vec<Rule> {
    vec![
        Rule::exact(Feature::Pattern(&GPA), 4),
        Rule::exact(Feature::DecimalAtMost(4.0), 3),
        Rule::new(Feature::HasComma, -3),
        Rule::new(Feature::HasLetter, -2),
    ]
}
