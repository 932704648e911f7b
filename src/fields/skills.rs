//! Skills, spoken languages and certifications.

use crate::layout::descriptions_line_index;
use crate::model::{Line, SectionTag, Sections, Skills};
use crate::scoring::patterns::{
    contains_any_token, CERTIFICATION_MARKERS, LANGUAGE_MARKERS, LIST_SEPARATOR,
    SPOKEN_LANGUAGES, TECH_KEYWORDS,
};

use super::bullets::extract_bullets;

/// Read the skills, languages and certifications sections independently.
pub fn extract_skills(sections: &Sections) -> Skills {
    let mut skills = Skills::default();

    for item in split_items(&list_items(sections.lines(SectionTag::Skills))) {
        let bucket = match classify(&item) {
            Category::Language => &mut skills.languages,
            Category::Certification => &mut skills.certifications,
            Category::Skill => &mut skills.skills,
        };
        push_unique(bucket, item);
    }

    for item in split_items(&list_items(sections.lines(SectionTag::Languages))) {
        let language = strip_proficiency(&item);
        if language.chars().count() > 1 {
            push_unique(&mut skills.languages, language.to_string());
        }
    }

    for item in list_items(sections.lines(SectionTag::Certifications)) {
        push_unique(&mut skills.certifications, item);
    }

    log::debug!(
        "extracted {} skills, {} languages, {} certifications",
        skills.skills.len(),
        skills.languages.len(),
        skills.certifications.len()
    );
    skills
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Skill,
    Language,
    Certification,
}

/// Technical keywords win over languages, languages over certifications.
fn classify(item: &str) -> Category {
    let lower = item.to_lowercase();
    if TECH_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Category::Skill
    } else if contains_any_token(item, SPOKEN_LANGUAGES)
        || contains_any_token(item, LANGUAGE_MARKERS)
    {
        Category::Language
    } else if contains_any_token(item, CERTIFICATION_MARKERS) {
        Category::Certification
    } else {
        Category::Skill
    }
}

/// Bullet items when the section has content lines, else separator-split text.
///
/// Lines are joined with a space first, so an item wrapped onto the next
/// line stays whole.
fn list_items(lines: &[Line]) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }
    if let Some(index) = descriptions_line_index(lines) {
        return extract_bullets(&lines[index..]);
    }

    let joined = lines
        .iter()
        .map(Line::text)
        .filter(|text| !text.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    LIST_SEPARATOR
        .split(&joined)
        .map(str::trim)
        .filter(|part| part.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Break items on list punctuation, dropping one-character leftovers.
fn split_items(items: &[String]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.split(|c: char| matches!(c, ',' | ';' | '|' | '/')))
        .map(str::trim)
        .filter(|part| part.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// "English: Native", "French - Fluent" and "German (B2)" name the language only.
fn strip_proficiency(item: &str) -> &str {
    item.split(|c: char| matches!(c, ':' | '-' | '(' | '\u{2013}' | '\u{2014}'))
        .next()
        .unwrap_or_default()
        .trim()
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextAtom;

    fn section(tag: SectionTag, texts: &[&str]) -> Sections {
        let mut sections = Sections::new();
        for (i, text) in texts.iter().enumerate() {
            let atom = TextAtom::new(*text, 72.0, 400.0, 600.0 - 12.0 * i as f32, 1, false);
            sections.push_line(tag, Line::from_atoms(vec![atom]));
        }
        sections
    }

    #[test]
    fn test_skills_section_is_classified() {
        let sections = section(
            SectionTag::Skills,
            &[
                "Python, Rust and Go,",
                "Docker / Kubernetes + Python;",
                "English, Spanish;",
                "PMP Certification",
            ],
        );
        let skills = extract_skills(&sections);

        assert_eq!(skills.skills, vec!["Python", "Rust", "Go", "Docker", "Kubernetes"]);
        assert_eq!(skills.languages, vec!["English", "Spanish"]);
        assert_eq!(skills.certifications, vec!["PMP Certification"]);
    }

    #[test]
    fn test_wrapped_skill_stays_whole() {
        let sections = section(SectionTag::Skills, &["Python, Machine", "Learning, Rust"]);
        let skills = extract_skills(&sections);
        assert_eq!(skills.skills, vec!["Python", "Machine Learning", "Rust"]);
    }

    #[test]
    fn test_bulleted_skills() {
        let sections = section(SectionTag::Skills, &["• Java; SQL", "• Terraform"]);
        let skills = extract_skills(&sections);
        assert_eq!(skills.skills, vec!["Java", "SQL", "Terraform"]);
    }

    #[test]
    fn test_languages_drop_proficiency() {
        let sections = section(
            SectionTag::Languages,
            &["English: Native, French - Fluent,", "German (B2)"],
        );
        let skills = extract_skills(&sections);

        assert_eq!(skills.languages, vec!["English", "French", "German"]);
        assert!(skills.skills.is_empty());
    }

    #[test]
    fn test_certifications_verbatim() {
        let sections = section(
            SectionTag::Certifications,
            &["• AWS Certified Solutions Architect", "• CKA"],
        );
        let skills = extract_skills(&sections);
        assert_eq!(
            skills.certifications,
            vec!["AWS Certified Solutions Architect", "CKA"]
        );
    }

    #[test]
    fn test_missing_sections() {
        assert!(extract_skills(&Sections::new()).is_empty());
    }
}
