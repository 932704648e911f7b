//! Parsing options and configuration.

use std::ops::RangeInclusive;

/// Options for parsing résumé documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode for pages whose text cannot be extracted
    pub error_mode: ErrorMode,

    /// Page selection (which pages to read)
    pub pages: PageSelection,

    /// Maximum number of text atoms accepted per document (None = unlimited)
    pub max_atoms: Option<usize>,

    /// Vertical tolerance for atoms sharing a line, in layout units
    pub line_tolerance: f32,

    /// A line gap larger than `typical gap * ratio` starts a new subsection
    pub subsection_gap_ratio: f32,

    /// Typical line gap assumed when a section has no repeated gap
    pub default_line_gap: f32,

    /// Start an unclassified section at bold all-caps lines matching no keyword
    pub split_unknown_headings: bool,

    /// Whether batch parsing may use multiple threads
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip pages whose content cannot be decoded).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Reject documents producing more than `limit` text atoms.
    pub fn with_max_atoms(mut self, limit: usize) -> Self {
        self.max_atoms = Some(limit);
        self
    }

    /// Set the same-line vertical tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance.max(0.0);
        self
    }

    /// Set the subsection gap ratio.
    pub fn with_subsection_gap_ratio(mut self, ratio: f32) -> Self {
        self.subsection_gap_ratio = ratio;
        self
    }

    /// Set the fallback typical line gap.
    pub fn with_default_line_gap(mut self, gap: f32) -> Self {
        self.default_line_gap = gap;
        self
    }

    /// Enable or disable unclassified sections for unknown headings.
    pub fn with_split_unknown_headings(mut self, split: bool) -> Self {
        self.split_unknown_headings = split;
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            pages: PageSelection::All,
            max_atoms: None,
            line_tolerance: 2.0,
            subsection_gap_ratio: 1.4,
            default_line_gap: 10.0,
            split_unknown_headings: false,
            parallel: true,
        }
    }
}

/// Error handling mode during text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any page error
    #[default]
    Strict,
    /// Skip pages whose content cannot be decoded
    Lenient,
}

/// Page selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Read all pages
    #[default]
    All,
    /// Read a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Read specific pages (1-indexed)
    Pages(Vec<u32>),
    /// Read the union of several ranges, ordered by start page
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-2", "1,3,5-7").
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        let mut ranges = Vec::new();
        for part in s.split(',') {
            let range = match part.split_once('-') {
                Some((start, end)) => {
                    let (start, end) = (parse_page(start)?, parse_page(end)?);
                    if start > end {
                        return Err(format!("Invalid page range: {}", part.trim()));
                    }
                    start..=end
                }
                None => {
                    let page = parse_page(part)?;
                    page..=page
                }
            };
            ranges.push(range);
        }

        if let [range] = ranges.as_slice() {
            if range.start() != range.end() {
                return Ok(PageSelection::Range(range.clone()));
            }
        }
        if ranges.iter().all(|r| r.start() == r.end()) {
            let mut pages: Vec<u32> = ranges.iter().map(|r| *r.start()).collect();
            pages.sort_unstable();
            pages.dedup();
            return Ok(PageSelection::Pages(pages));
        }

        ranges.sort_by_key(|r| (*r.start(), *r.end()));
        ranges.dedup();
        Ok(PageSelection::Ranges(ranges))
    }
}

fn parse_page(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(format!("Invalid page number: {:?}", s.trim())),
        Ok(page) => Ok(page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .lenient()
            .with_max_atoms(5_000)
            .with_line_tolerance(3.0)
            .sequential();

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert_eq!(options.max_atoms, Some(5_000));
        assert!((options.line_tolerance - 3.0).abs() < f32::EPSILON);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert_eq!(options.pages, PageSelection::All);
        assert!((options.subsection_gap_ratio - 1.4).abs() < f32::EPSILON);
        assert!((options.default_line_gap - 10.0).abs() < f32::EPSILON);
        assert!(!options.split_unknown_headings);
        assert!(options.parallel);
    }

    #[test]
    fn test_page_selection_includes() {
        let range = PageSelection::Range(2..=3);
        assert!(!range.includes(1));
        assert!(range.includes(2));
        assert!(range.includes(3));

        let pages = PageSelection::Pages(vec![1, 3]);
        assert!(pages.includes(1));
        assert!(!pages.includes(2));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(
            PageSelection::parse("1-2").unwrap(),
            PageSelection::Range(1..=2)
        );
        assert_eq!(
            PageSelection::parse("3,1,3").unwrap(),
            PageSelection::Pages(vec![1, 3])
        );
        assert_eq!(
            PageSelection::parse("3,1,5-6,3").unwrap(),
            PageSelection::Ranges(vec![1..=1, 3..=3, 5..=6])
        );
        assert!(PageSelection::parse("0").is_err());
        assert!(PageSelection::parse("4-2").is_err());
        assert!(PageSelection::parse("1,5-3").is_err());
        assert!(PageSelection::parse("x").is_err());
    }

    #[test]
    fn test_wide_sub_range_is_not_expanded() {
        let pages = PageSelection::parse("1,2-4000000000").unwrap();

        assert_eq!(pages, PageSelection::Ranges(vec![1..=1, 2..=4_000_000_000]));
        assert!(pages.includes(3_999_999_999));
        assert!(!pages.includes(4_000_000_001));
    }
}
