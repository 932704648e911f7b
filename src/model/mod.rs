//! Data model shared by every pipeline stage.
//!
//! Positioned text flows through the stages as [`TextAtom`]s grouped into
//! [`Line`]s and tagged [`Sections`]; the field extractors produce the
//! [`ParsedResume`] record.

mod atom;
mod line;
mod resume;
mod section;

pub use atom::{is_bold_font, TextAtom};
pub use line::Line;
pub use resume::{Education, Experience, ParsedResume, Profile, Project, Skills};
pub use section::{KeywordStrength, Section, SectionTag, Sections};
