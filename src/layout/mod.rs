//! Layout analysis: atoms to lines, lines to sections and subsections.

pub mod lines;
pub mod sections;
pub mod subsections;

pub use lines::{assemble_lines, flatten, raw_text};
pub use sections::{classify_sections, match_header};
pub use subsections::{descriptions_line_index, split_subsections, typical_line_gap};
