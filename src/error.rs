//! Error types for unresume.
//!
//! Only failures to read the input document cross the pipeline boundary.
//! Heuristics that match nothing are not errors: they leave the affected
//! fields empty.

use std::io;
use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a résumé document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not start with a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a version we cannot read.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// A page content stream could not be turned into text atoms.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The document produced more text atoms than the configured ceiling.
    #[error("Document has {found} text atoms, limit is {limit}")]
    TooManyAtoms { found: usize, limit: usize },

    /// Serializing a parsed résumé failed.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl Error {
    /// Whether this error means the input document could not be read.
    ///
    /// Every error produced by the parsing pipeline is a document read error;
    /// only [`Error::Serialize`], which comes from rendering a finished
    /// result, is not.
    pub fn is_document_read(&self) -> bool {
        !matches!(self, Error::Serialize(_))
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
