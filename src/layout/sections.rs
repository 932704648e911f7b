//! Section classification: partition lines under recognized headers.

use crate::model::{KeywordStrength, Line, SectionTag, Sections};

/// Headers are short; longer lines are content even if a keyword appears.
const MAX_HEADER_WORDS: usize = 5;

/// Split lines into sections.
///
/// Header lines are consumed. Lines before the first header land in the
/// profile bucket. When `split_unknown_headings` is set, a heading-shaped
/// line that matches no keyword opens an [`SectionTag::Unclassified`] section.
pub fn classify_sections(lines: &[Line], split_unknown_headings: bool) -> Sections {
    let mut sections = Sections::new();
    let mut current = SectionTag::Profile;

    for line in lines {
        let header = match_header(line).or_else(|| {
            (split_unknown_headings && line.is_section_title_candidate())
                .then_some(SectionTag::Unclassified)
        });

        match header {
            Some(tag) => {
                log::trace!("header {:?} -> {}", line.text(), tag);
                current = tag;
                sections.open(tag);
            }
            None => sections.push_line(current, line.clone()),
        }
    }

    log::debug!(
        "classified {} lines into {} sections",
        lines.len(),
        sections.len()
    );
    sections
}

/// The section a header line introduces, if it is one.
///
/// Among all matching keywords the longest wins; equal lengths go to the tag
/// declared first.
pub fn match_header(line: &Line) -> Option<SectionTag> {
    if line.is_blank() || line.word_count() > MAX_HEADER_WORDS {
        return None;
    }

    let normalized = normalize(line.text());
    let shouted = is_all_caps(line.text());

    let mut best: Option<(usize, SectionTag)> = None;
    for tag in SectionTag::KEYWORD_TAGS {
        for &(keyword, strength) in tag.keywords() {
            if strength == KeywordStrength::Weak && !shouted {
                continue;
            }
            if !contains_phrase(&normalized, keyword) {
                continue;
            }
            if best.map_or(true, |(len, _)| keyword.len() > len) {
                best = Some((keyword.len(), tag));
            }
        }
    }
    best.map(|(_, tag)| tag)
}

/// Lowercase, punctuation folded to spaces, padded for whole-word search.
fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();
    format!(" {} ", folded.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn contains_phrase(normalized: &str, keyword: &str) -> bool {
    normalized.contains(&format!(" {} ", keyword))
}

fn is_all_caps(text: &str) -> bool {
    let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextAtom;

    fn line(text: &str, bold: bool) -> Line {
        Line::from_atoms(vec![TextAtom::new(text, 72.0, 200.0, 700.0, 1, bold)])
    }

    fn header(text: &str) -> Option<SectionTag> {
        match_header(&line(text, false))
    }

    #[test]
    fn test_match_header_keywords() {
        assert_eq!(header("EXPERIENCE"), Some(SectionTag::Experience));
        assert_eq!(header("Work Experience:"), Some(SectionTag::Experience));
        assert_eq!(header("Education"), Some(SectionTag::Education));
        assert_eq!(header("Technical Skills"), Some(SectionTag::Skills));
        assert_eq!(header("Professional Summary"), Some(SectionTag::Summary));
        assert_eq!(header("Acme Corp"), None);
        assert_eq!(header(""), None);
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(header("Networking"), None);
        assert_eq!(header("Skillset"), None);
    }

    #[test]
    fn test_long_lines_are_not_headers() {
        assert_eq!(
            header("Gained broad experience across the whole stack"),
            None
        );
    }

    #[test]
    fn test_weak_keywords_need_capitals() {
        assert_eq!(header("University of Texas"), None);
        assert_eq!(header("Rice University"), None);
        assert_eq!(header("UNIVERSITY"), Some(SectionTag::Education));
        assert_eq!(header("Degree"), None);
        assert_eq!(header("DEGREE"), Some(SectionTag::Education));
    }

    #[test]
    fn test_mixed_case_headings() {
        assert_eq!(header("Technical Proficiencies"), Some(SectionTag::Skills));
        assert_eq!(header("Job History"), Some(SectionTag::Experience));
        assert_eq!(header("Work"), Some(SectionTag::Experience));
        assert_eq!(header("Personal Details"), Some(SectionTag::Profile));
        assert_eq!(header("About"), Some(SectionTag::Summary));
        assert_eq!(header("Personal Projects"), Some(SectionTag::Projects));
    }

    #[test]
    fn test_mixed_case_heading_opens_section() {
        let lines = vec![
            line("Jane Doe", true),
            line("Job History", false),
            line("Acme Corp", true),
            line("Technical Proficiencies", false),
            line("Rust, Go", false),
        ];
        let sections = classify_sections(&lines, false);

        assert_eq!(sections.lines(SectionTag::Profile).len(), 1);
        assert_eq!(sections.lines(SectionTag::Experience)[0].text(), "Acme Corp");
        assert_eq!(sections.lines(SectionTag::Skills)[0].text(), "Rust, Go");
    }

    #[test]
    fn test_longest_keyword_wins() {
        // "languages" (Languages) vs "programming languages" (Skills)
        assert_eq!(header("Programming Languages"), Some(SectionTag::Skills));
        // "education" vs "certifications"
        assert_eq!(
            header("Education & Certifications"),
            Some(SectionTag::Certifications)
        );
    }

    #[test]
    fn test_equal_length_uses_declared_order() {
        // "profile" and "summary" are both seven letters
        assert_eq!(header("Profile Summary"), Some(SectionTag::Profile));
    }

    #[test]
    fn test_partition_is_total_and_ordered() {
        let lines = vec![
            line("JANE DOE", true),
            line("jane@example.com", false),
            line("SKILLS", true),
            line("Rust, Go", false),
            line("EDUCATION", true),
            line("MIT", false),
            line("Skills", true),
            line("SQL", false),
        ];
        let sections = classify_sections(&lines, false);

        let tags: Vec<_> = sections.iter().map(|s| s.tag).collect();
        assert_eq!(
            tags,
            vec![SectionTag::Profile, SectionTag::Skills, SectionTag::Education]
        );
        let skills: Vec<_> = sections
            .lines(SectionTag::Skills)
            .iter()
            .map(Line::text)
            .collect();
        assert_eq!(skills, vec!["Rust, Go", "SQL"]);

        // every non-header line lands in exactly one section
        assert_eq!(sections.line_count(), 5);
    }

    #[test]
    fn test_unknown_headings() {
        let lines = vec![
            line("Jane", false),
            line("MISCELLANEOUS", true),
            line("Likes chess", false),
        ];

        let off = classify_sections(&lines, false);
        assert_eq!(off.lines(SectionTag::Profile).len(), 3);

        let on = classify_sections(&lines, true);
        assert_eq!(on.lines(SectionTag::Profile).len(), 1);
        assert_eq!(on.lines(SectionTag::Unclassified)[0].text(), "Likes chess");
    }
}
