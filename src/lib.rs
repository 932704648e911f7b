//! # unresume
//!
//! Layout-aware résumé parsing for Rust.
//!
//! This library reads a résumé PDF and turns it into a structured candidate
//! record (name, contact details, work history, education, skills) using
//! page geometry and weighted heuristic rules, without any trained model.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::{parse_file, render};
//!
//! fn main() -> unresume::Result<()> {
//!     let resume = parse_file("resume.pdf")?;
//!     println!("{}", resume.profile.name);
//!
//!     let json = render::to_json(&resume, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`extract`]: PDF content streams to positioned text atoms
//! 2. [`layout`]: atoms to lines, lines to sections and subsections
//! 3. [`scoring`]: weighted feature rules pick one value among candidates
//! 4. [`fields`]: per-section extractors built on the scoring engine
//! 5. [`assemble`]: extractor outputs merged into a [`ParsedResume`]
//!
//! Heuristics that match nothing leave fields empty; only failures to read
//! the document are errors.

pub mod assemble;
pub mod error;
pub mod extract;
pub mod fields;
pub mod layout;
pub mod model;
pub mod options;
pub mod render;
pub mod scoring;

pub use assemble::{assemble, Layout};
pub use error::{Error, Result};
pub use extract::{extract_atoms, is_pdf_bytes};
pub use model::{
    Education, Experience, Line, ParsedResume, Profile, Project, Section, SectionTag, Sections,
    Skills, TextAtom,
};
pub use options::{ErrorMode, PageSelection, ParseOptions};
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

use rayon::prelude::*;

/// Parse a résumé PDF file.
///
/// # Example
///
/// ```no_run
/// use unresume::parse_file;
///
/// let resume = parse_file("resume.pdf").unwrap();
/// println!("{} positions", resume.experiences.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedResume> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a résumé PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use unresume::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient().with_max_atoms(50_000);
/// let resume = parse_file_with_options("resume.pdf", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParsedResume> {
    let data = std::fs::read(path)?;
    parse_bytes_with_options(&data, options)
}

/// Parse a résumé PDF from bytes.
///
/// # Example
///
/// ```no_run
/// use unresume::parse_bytes;
///
/// let data = std::fs::read("resume.pdf").unwrap();
/// let resume = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<ParsedResume> {
    parse_bytes_with_options(data, ParseOptions::default())
}

/// Parse a résumé PDF from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<ParsedResume> {
    let atoms = extract_atoms(data, &options)?;
    Ok(parse_atoms(&atoms, &options))
}

/// Parse a résumé PDF from a reader.
///
/// # Example
///
/// ```no_run
/// use unresume::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("resume.pdf").unwrap();
/// let resume = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<ParsedResume> {
    parse_reader_with_options(reader, ParseOptions::default())
}

/// Parse a résumé PDF from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(
    mut reader: R,
    options: ParseOptions,
) -> Result<ParsedResume> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_bytes_with_options(&data, options)
}

/// Run the pipeline on atoms that were already extracted.
///
/// Never fails: unmatched heuristics leave fields empty.
pub fn parse_atoms(atoms: &[TextAtom], options: &ParseOptions) -> ParsedResume {
    let layout = Layout::analyze(atoms, options);
    let resume = layout.assemble(options);
    log::debug!(
        "parsed résumé: {} experiences, {} educations, {} skills",
        resume.experiences.len(),
        resume.educations.len(),
        resume.skills.skills.len()
    );
    resume
}

/// Parse many résumé files, one result per path in input order.
///
/// Files are parsed in parallel unless `options.parallel` is off.
pub fn parse_files<P>(paths: &[P], options: &ParseOptions) -> Vec<Result<ParsedResume>>
where
    P: AsRef<Path> + Sync,
{
    let parse_one = |path: &P| parse_file_with_options(path, options.clone());
    if options.parallel {
        paths.par_iter().map(parse_one).collect()
    } else {
        paths.iter().map(parse_one).collect()
    }
}

/// Parse a résumé PDF file, reading it asynchronously.
#[cfg(feature = "async")]
pub async fn parse_file_async<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParsedResume> {
    let data = tokio::fs::read(path).await?;
    parse_bytes_with_options(&data, options)
}

/// Parse a résumé PDF from an async reader.
#[cfg(feature = "async")]
pub async fn parse_reader_async<R>(mut reader: R, options: ParseOptions) -> Result<ParsedResume>
where
    R: tokio::io::AsyncRead + Unpin,
{
    use tokio::io::AsyncReadExt;

    let mut data = Vec::new();
    reader.read_to_end(&mut data).await?;
    parse_bytes_with_options(&data, options)
}

/// Builder for parsing résumé documents.
///
/// # Example
///
/// ```no_run
/// use unresume::ResumeParser;
///
/// let resume = ResumeParser::new()
///     .lenient()
///     .split_unknown_headings()
///     .parse_file("resume.pdf")?;
/// # Ok::<(), unresume::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    options: ParseOptions,
}

impl ResumeParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Skip pages whose content cannot be decoded.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Disable parallel batch parsing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.options = self.options.with_pages(pages);
        self
    }

    /// Reject documents producing more than `limit` text atoms.
    pub fn with_max_atoms(mut self, limit: usize) -> Self {
        self.options = self.options.with_max_atoms(limit);
        self
    }

    /// Give unknown bold all-caps headings their own section.
    pub fn split_unknown_headings(mut self) -> Self {
        self.options = self.options.with_split_unknown_headings(true);
        self
    }

    /// The options this parser runs with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a résumé PDF file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParsedResume> {
        parse_file_with_options(path, self.options.clone())
    }

    /// Parse a résumé PDF from bytes.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<ParsedResume> {
        parse_bytes_with_options(data, self.options.clone())
    }

    /// Parse a résumé PDF from a reader.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ParsedResume> {
        parse_reader_with_options(reader, self.options.clone())
    }

    /// Run the pipeline on already extracted atoms.
    pub fn parse_atoms(&self, atoms: &[TextAtom]) -> ParsedResume {
        parse_atoms(atoms, &self.options)
    }

    /// Parse many files; see [`parse_files`].
    pub fn parse_files<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<Result<ParsedResume>> {
        parse_files(paths, &self.options)
    }

    /// Extract and lay out a document without running the field extractors.
    pub fn analyze_bytes(&self, data: &[u8]) -> Result<Layout> {
        let atoms = extract_atoms(data, &self.options)?;
        Ok(Layout::analyze(&atoms, &self.options))
    }

    /// Like [`ResumeParser::analyze_bytes`], reading from a file.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<Layout> {
        let data = std::fs::read(path)?;
        self.analyze_bytes(&data)
    }
}
