//! Work-history entries.

use crate::layout::split_subsections;
use crate::model::{Experience, Line, SectionTag, Sections};
use crate::options::ParseOptions;
use crate::scoring::patterns::{CITY_STATE, JOB_TITLES};
use crate::scoring::{select, select_exact, Feature, Mode, Rule};

use super::bullets::extract_bullets;
use super::dates::{date_rules, parse_date_range};
use super::{atoms_of, split_header};

/// One entry per subsection of the experience section.
pub fn extract_experiences(sections: &Sections, options: &ParseOptions) -> Vec<Experience> {
    let subsections = split_subsections(
        sections.lines(SectionTag::Experience),
        options.subsection_gap_ratio,
        options.default_line_gap,
    );

    let experiences: Vec<Experience> = subsections
        .into_iter()
        .filter(|lines| lines.iter().any(|l| !l.is_blank()))
        .map(experience_from_lines)
        .collect();

    log::debug!("extracted {} experience entries", experiences.len());
    experiences
}

/// Build one entry; only the header lines are scored.
pub fn experience_from_lines(lines: &[Line]) -> Experience {
    let (header, content) = split_header(lines);
    let atoms = atoms_of(header);

    let date = select(&atoms, &date_rules(), Mode::Permissive);
    let title = select(&atoms, &title_rules(), Mode::Permissive);
    let company = select(&atoms, &company_rules(&date, &title), Mode::Permissive);
    let location = select_exact(
        &atoms,
        &[Rule::exact(Feature::Pattern(&CITY_STATE), 4)],
        Mode::Strict,
    );
    let (start_date, end_date) = parse_date_range(&date);

    let responsibilities = extract_bullets(content);
    Experience {
        company,
        title,
        location,
        start_date,
        end_date,
        description: responsibilities.join("\n"),
        responsibilities,
    }
}

fn title_rules() -> Vec<Rule> {
    vec![
        Rule::new(Feature::AnyToken(JOB_TITLES), 4),
        Rule::new(Feature::HasNumber, -4),
        Rule::new(Feature::MoreWordsThan(5), -2),
    ]
}

/// The company is whatever bold text is left once date and title are taken.
fn company_rules(date: &str, title: &str) -> Vec<Rule> {
    vec![
        Rule::new(Feature::Bold, 2),
        Rule::new(Feature::Contains(date.to_string()), -4),
        Rule::new(Feature::Contains(title.to_string()), -4),
    ]
}
