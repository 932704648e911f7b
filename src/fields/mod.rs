//! Field extractors.
//!
//! Each extractor reads the lines of one section (or its subsections) and
//! fills one part of the résumé record. A missing section yields default
//! values, never an error.

pub mod bullets;
pub mod dates;
pub mod education;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

pub use bullets::extract_bullets;
pub use dates::parse_date_range;
pub use education::extract_educations;
pub use experience::extract_experiences;
pub use profile::extract_profile;
pub use projects::extract_projects;
pub use skills::extract_skills;

use crate::model::Line;

/// Split a subsection at its first content line.
///
/// Everything before the index is header; without one the whole
/// subsection is header and there is no content.
pub(crate) fn split_header(lines: &[Line]) -> (&[Line], &[Line]) {
    match crate::layout::descriptions_line_index(lines) {
        Some(index) => lines.split_at(index),
        None => (lines, &lines[lines.len()..]),
    }
}

/// Atoms of the given lines, in reading order.
pub(crate) fn atoms_of(lines: &[Line]) -> Vec<crate::model::TextAtom> {
    crate::layout::flatten(lines)
}
