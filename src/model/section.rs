//! Sections: named, contiguous runs of lines following a header.

use serde::{Deserialize, Serialize};

use super::Line;

/// Semantic label of a résumé section.
///
/// Declaration order is the tie-break priority used when a header matches
/// keywords of several tags with equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionTag {
    /// Contact block; also absorbs everything before the first header
    Profile,
    /// Summary, objective or "about me" paragraph
    Summary,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Awards,
    Languages,
    Interests,
    References,
    Publications,
    Volunteer,
    /// A heading that matched no known keyword
    Unclassified,
}

/// How much evidence a keyword needs before a line counts as a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordStrength {
    /// Enough on its own
    Strong,
    /// Names an institution or qualification ("Rice University", "Degree in
    /// Physics") as often as a heading, so the line must be in capitals
    Weak,
}

use KeywordStrength::{Strong, Weak};

impl SectionTag {
    /// All tags that can be recognized from a header keyword, in priority order.
    pub const KEYWORD_TAGS: [SectionTag; 13] = [
        SectionTag::Profile,
        SectionTag::Summary,
        SectionTag::Education,
        SectionTag::Experience,
        SectionTag::Skills,
        SectionTag::Projects,
        SectionTag::Certifications,
        SectionTag::Awards,
        SectionTag::Languages,
        SectionTag::Interests,
        SectionTag::References,
        SectionTag::Publications,
        SectionTag::Volunteer,
    ];

    /// Header keywords for this tag, lowercase.
    pub fn keywords(self) -> &'static [(&'static str, KeywordStrength)] {
        match self {
            SectionTag::Profile => &[
                ("profile", Strong),
                ("contact", Strong),
                ("contact information", Strong),
                ("personal information", Strong),
                ("personal", Strong),
            ],
            SectionTag::Summary => &[
                ("summary", Strong),
                ("objective", Strong),
                ("about me", Strong),
                ("professional summary", Strong),
                ("career objective", Strong),
                ("about", Strong),
            ],
            SectionTag::Education => &[
                ("education", Strong),
                ("academic", Strong),
                ("academic background", Strong),
                ("degree", Weak),
                ("university", Weak),
                ("college", Weak),
                ("school", Weak),
            ],
            SectionTag::Experience => &[
                ("experience", Strong),
                ("employment", Strong),
                ("work experience", Strong),
                ("work history", Strong),
                ("professional experience", Strong),
                ("work", Strong),
                ("history", Strong),
                ("job", Strong),
            ],
            SectionTag::Skills => &[
                ("skills", Strong),
                ("expertise", Strong),
                ("technologies", Strong),
                ("core competencies", Strong),
                ("competencies", Strong),
                ("competences", Strong),
                ("programming languages", Strong),
                ("technical skills", Strong),
                ("technical", Strong),
            ],
            SectionTag::Projects => &[
                ("projects", Strong),
                ("portfolio", Strong),
                ("academic projects", Strong),
                ("personal projects", Strong),
            ],
            SectionTag::Certifications => &[
                ("certifications", Strong),
                ("certificates", Strong),
                ("licenses", Strong),
                ("courses", Strong),
            ],
            SectionTag::Awards => &[
                ("awards", Strong),
                ("honors", Strong),
                ("achievements", Strong),
                ("accomplishments", Strong),
            ],
            SectionTag::Languages => &[("languages", Strong), ("language proficiency", Strong)],
            SectionTag::Interests => &[
                ("interests", Strong),
                ("hobbies", Strong),
                ("activities", Strong),
            ],
            SectionTag::References => &[("references", Strong), ("referees", Strong)],
            SectionTag::Publications => &[
                ("publications", Strong),
                ("papers", Strong),
                ("articles", Strong),
            ],
            SectionTag::Volunteer => &[
                ("volunteer", Strong),
                ("volunteering", Strong),
                ("community service", Strong),
            ],
            SectionTag::Unclassified => &[],
        }
    }

    /// Stable lowercase name of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionTag::Profile => "profile",
            SectionTag::Summary => "summary",
            SectionTag::Education => "education",
            SectionTag::Experience => "experience",
            SectionTag::Skills => "skills",
            SectionTag::Projects => "projects",
            SectionTag::Certifications => "certifications",
            SectionTag::Awards => "awards",
            SectionTag::Languages => "languages",
            SectionTag::Interests => "interests",
            SectionTag::References => "references",
            SectionTag::Publications => "publications",
            SectionTag::Volunteer => "volunteer",
            SectionTag::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for SectionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged run of content lines. The header line itself is not included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub tag: SectionTag,
    pub lines: Vec<Line>,
}

impl Section {
    /// Create an empty section.
    pub fn new(tag: SectionTag) -> Self {
        Self {
            tag,
            lines: Vec::new(),
        }
    }

    /// Check if the section has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Sections of one document in first-seen order.
///
/// The `Profile` section always exists and comes first: it is the bucket for
/// lines preceding the first recognized header. Each tag appears at most once;
/// a repeated header appends to the existing section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Create a section list holding only the empty profile bucket.
    pub fn new() -> Self {
        Self {
            sections: vec![Section::new(SectionTag::Profile)],
        }
    }

    /// Append a line to the section for `tag`, creating it if needed.
    pub(crate) fn push_line(&mut self, tag: SectionTag, line: Line) {
        self.open(tag).lines.push(line);
    }

    /// Make sure a section for `tag` exists.
    pub(crate) fn open(&mut self, tag: SectionTag) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.tag == tag) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(tag));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }

    /// Get the section for a tag.
    pub fn get(&self, tag: SectionTag) -> Option<&Section> {
        self.sections.iter().find(|s| s.tag == tag)
    }

    /// Lines of the section for a tag; empty when the section is missing.
    pub fn lines(&self, tag: SectionTag) -> &[Line] {
        self.get(tag).map(|s| s.lines.as_slice()).unwrap_or(&[])
    }

    /// Whether a non-empty section exists for the tag.
    pub fn has(&self, tag: SectionTag) -> bool {
        self.get(tag).map(|s| !s.is_empty()).unwrap_or(false)
    }

    /// Iterate sections in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Number of sections (including an empty profile bucket).
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if no section holds any line.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// Total number of content lines.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
