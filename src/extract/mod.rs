//! Text extraction: PDF bytes to ordered [`TextAtom`]s.
//!
//! Atoms come out page by page in page order, and within a page in
//! content-stream order. Reading order is reconstructed later by the line
//! assembler.

pub mod backend;
pub mod content;

use std::path::Path;

pub use backend::{LopdfBackend, PdfBackend};
pub use content::PageInterpreter;

use crate::error::{Error, Result};
use crate::model::TextAtom;
use crate::options::{ErrorMode, PageSelection, ParseOptions};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Check the PDF header and return the declared version.
pub fn check_header(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();
    match version_bytes {
        [b'1' | b'2', b'.', minor] if minor.is_ascii_digit() => Ok(version),
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Err(Error::UnsupportedVersion(version))
        }
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if bytes start with a readable PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    check_header(data).is_ok()
}

/// Extract text atoms from PDF bytes.
pub fn extract_atoms(data: &[u8], options: &ParseOptions) -> Result<Vec<TextAtom>> {
    check_header(data)?;
    let backend = LopdfBackend::load_bytes(data)?;
    extract_from_backend(&backend, options)
}

/// Extract text atoms from a PDF file.
pub fn extract_atoms_from_file<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Vec<TextAtom>> {
    let data = std::fs::read(path)?;
    extract_atoms(&data, options)
}

/// Extract text atoms from any backend.
pub fn extract_from_backend<B: PdfBackend>(
    backend: &B,
    options: &ParseOptions,
) -> Result<Vec<TextAtom>> {
    let pages = backend.pages();
    let total_pages = pages.len() as u32;
    check_selection(&options.pages, total_pages, options.error_mode)?;

    let mut atoms = Vec::new();
    for (&page_num, &page_id) in &pages {
        if !options.pages.includes(page_num) {
            continue;
        }

        match extract_page(backend, page_num, page_id) {
            Ok(page_atoms) => {
                log::debug!("page {}: {} atoms", page_num, page_atoms.len());
                atoms.extend(page_atoms);
            }
            Err(e) => {
                if options.error_mode == ErrorMode::Strict {
                    return Err(e);
                }
                log::warn!("Failed to extract text from page {}: {}", page_num, e);
            }
        }

        if let Some(limit) = options.max_atoms {
            if atoms.len() > limit {
                return Err(Error::TooManyAtoms {
                    found: atoms.len(),
                    limit,
                });
            }
        }
    }

    log::debug!(
        "extracted {} atoms from {} pages",
        atoms.len(),
        total_pages
    );
    Ok(atoms)
}

fn extract_page<B: PdfBackend>(
    backend: &B,
    page_num: u32,
    page_id: backend::PageId,
) -> Result<Vec<TextAtom>> {
    let fonts = backend.page_fonts(page_id)?;
    let content = backend.page_content(page_id)?;
    let ops = backend.decode_content(&content)?;

    let interpreter = PageInterpreter::new(page_num, &fonts, |font, bytes| {
        backend.decode_text(page_id, font, bytes)
    });
    Ok(interpreter.run(&ops))
}

/// Explicitly requested pages must exist.
fn check_selection(selection: &PageSelection, total: u32, mode: ErrorMode) -> Result<()> {
    let highest = match selection {
        PageSelection::All => return Ok(()),
        PageSelection::Range(range) => *range.start(),
        PageSelection::Pages(pages) => pages.iter().copied().max().unwrap_or(0),
        PageSelection::Ranges(ranges) => ranges.iter().map(|r| *r.start()).max().unwrap_or(0),
    };

    if highest > total {
        if mode == ErrorMode::Strict {
            return Err(Error::PageOutOfRange(highest, total));
        }
        log::warn!("Page {} requested but document has {} pages", highest, total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_header() {
        assert_eq!(check_header(b"%PDF-1.7\n%\xe2\xe3").unwrap(), "1.7");
        assert_eq!(check_header(b"%PDF-2.0\n").unwrap(), "2.0");
        assert!(matches!(
            check_header(b"%PDF-3.0\n"),
            Err(Error::UnsupportedVersion(v)) if v == "3.0"
        ));
        assert!(matches!(check_header(b"%PDF"), Err(Error::UnknownFormat)));
        assert!(matches!(
            check_header(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
    }

    #[test]
    fn test_garbage_is_document_read_error() {
        let err = extract_atoms(b"\x00\x01garbage bytes", &ParseOptions::default()).unwrap_err();
        assert!(err.is_document_read());
    }

    #[test]
    fn test_check_selection() {
        assert!(check_selection(&PageSelection::All, 1, ErrorMode::Strict).is_ok());
        assert!(check_selection(&PageSelection::Range(1..=5), 2, ErrorMode::Strict).is_ok());
        assert!(matches!(
            check_selection(&PageSelection::Pages(vec![1, 4]), 2, ErrorMode::Strict),
            Err(Error::PageOutOfRange(4, 2))
        ));
        assert!(check_selection(&PageSelection::Pages(vec![4]), 2, ErrorMode::Lenient).is_ok());
        assert!(
            check_selection(&PageSelection::Ranges(vec![1..=1, 2..=9]), 2, ErrorMode::Strict)
                .is_ok()
        );
        assert!(matches!(
            check_selection(&PageSelection::Ranges(vec![1..=1, 3..=9]), 2, ErrorMode::Strict),
            Err(Error::PageOutOfRange(3, 2))
        ));
    }
}
