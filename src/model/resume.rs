//! The structured candidate record produced by the pipeline.

use serde::{Deserialize, Serialize};

/// A parsed résumé.
///
/// Every field may be empty: a heuristic that finds nothing leaves its
/// field at the default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    /// All line texts joined with newlines, in reading order
    pub raw_text: String,
}

impl ParsedResume {
    /// Check if no field was recognized.
    pub fn is_empty(&self) -> bool {
        self.profile == Profile::default()
            && self.experiences.is_empty()
            && self.educations.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
    }
}

/// Contact details and summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: String,
    pub summary: String,
}

/// One position held.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Responsibilities joined with newlines
    pub description: String,
    pub responsibilities: Vec<String>,
}

/// One school attended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub gpa: String,
    pub start_date: String,
    pub end_date: String,
    pub descriptions: Vec<String>,
}

/// Skill, language and certification lists, each de-duplicated in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

impl Skills {
    /// Check if all three lists are empty.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.languages.is_empty() && self.certifications.is_empty()
    }
}

/// A personal or academic project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub date: String,
    pub descriptions: Vec<String>,
}
