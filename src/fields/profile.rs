//! Profile fields: name, contact details and summary.

use crate::model::{Profile, SectionTag, Sections, TextAtom};
use crate::scoring::patterns::{CITY_STATE, EMAIL, HTTP_URL, NAME, PHONE, URL_PATH, WWW_URL};
use crate::scoring::{select, select_exact, Feature, Mode, Rule};

use super::atoms_of;

/// Extract the profile from the lines before the first section header.
///
/// A summary section, when present, replaces the scored summary.
pub fn extract_profile(sections: &Sections) -> Profile {
    let atoms = atoms_of(sections.lines(SectionTag::Profile));
    let mut profile = profile_from_atoms(&atoms);

    let summary = sections
        .lines(SectionTag::Summary)
        .iter()
        .map(|l| l.text().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !summary.is_empty() {
        profile.summary = summary;
    }
    profile
}

/// Score every profile field against the same candidates.
pub fn profile_from_atoms(atoms: &[TextAtom]) -> Profile {
    Profile {
        name: select(atoms, &name_rules(), Mode::Permissive),
        email: select_exact(atoms, &email_rules(), Mode::Strict),
        phone: select_exact(atoms, &phone_rules(), Mode::Strict),
        location: select_exact(atoms, &location_rules(), Mode::Strict),
        url: select_exact(atoms, &url_rules(), Mode::Strict),
        summary: select(atoms, &summary_rules(), Mode::Strict),
    }
}

fn name_rules() -> Vec<Rule> {
    vec![
        Rule::exact(Feature::Pattern(&NAME), 3),
        Rule::new(Feature::Bold, 2),
        Rule::new(Feature::AllUppercase, 2),
        Rule::new(Feature::Pattern(&EMAIL), -4),
        Rule::new(Feature::HasNumber, -4),
        Rule::new(Feature::HasComma, -4),
    ]
}

fn email_rules() -> Vec<Rule> {
    vec![
        Rule::exact(Feature::Pattern(&EMAIL), 4),
        Rule::new(Feature::Bold, -1),
        Rule::new(Feature::HasComma, -2),
    ]
}

fn phone_rules() -> Vec<Rule> {
    vec![
        Rule::exact(Feature::Pattern(&PHONE), 4),
        Rule::new(Feature::HasLetter, -4),
    ]
}

fn location_rules() -> Vec<Rule> {
    vec![
        Rule::exact(Feature::Pattern(&CITY_STATE), 4),
        Rule::new(Feature::Bold, -1),
        Rule::new(Feature::Pattern(&EMAIL), -4),
    ]
}

fn url_rules() -> Vec<Rule> {
    vec![
        Rule::exact(Feature::Pattern(&URL_PATH), 4),
        Rule::exact(Feature::Pattern(&HTTP_URL), 3),
        Rule::exact(Feature::Pattern(&WWW_URL), 3),
        Rule::new(Feature::Bold, -1),
        Rule::new(Feature::Pattern(&EMAIL), -4),
    ]
}

fn summary_rules() -> Vec<Rule> {
    vec![
        Rule::new(Feature::MinWords(4), 4),
        Rule::new(Feature::Bold, -1),
        Rule::new(Feature::Pattern(&EMAIL), -4),
        Rule::new(Feature::Pattern(&CITY_STATE), -4),
    ]
}
