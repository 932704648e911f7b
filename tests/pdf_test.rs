//! End-to-end tests on PDFs generated in memory.

mod common;

use std::io::Cursor;

use common::{bold, build_pdf, jane_doe_pdf, regular};
use unresume::{
    extract_atoms, parse_bytes, parse_bytes_with_options, parse_file, parse_reader, Error,
    PageSelection, ParseOptions, ResumeParser, SectionTag,
};

#[test]
fn test_jane_doe_resume() {
    let resume = parse_bytes(&jane_doe_pdf()).unwrap();

    assert_eq!(resume.profile.name, "JANE DOE");
    assert_eq!(resume.profile.email, "jane@example.com");
    assert_eq!(resume.profile.location, "Austin, TX");

    assert_eq!(resume.experiences.len(), 1);
    assert_eq!(resume.experiences[0].company, "Acme Corp");
    assert_eq!(resume.experiences[0].responsibilities, vec!["Built systems"]);

    assert_eq!(resume.educations.len(), 1);
    let edu = &resume.educations[0];
    assert_eq!(edu.school, "Rice University");
    assert_eq!(edu.degree, "Bachelor of Science in Physics");
    assert_eq!(edu.field_of_study, "Physics");
    assert_eq!((edu.start_date.as_str(), edu.end_date.as_str()), ("2014", "2018"));

    assert_eq!(resume.skills.skills, vec!["Rust", "Python", "SQL"]);
    assert!(resume.raw_text.starts_with("JANE DOE\njane@example.com\n"));
}

#[test]
fn test_atoms_carry_geometry_and_weight() {
    let atoms = extract_atoms(&jane_doe_pdf(), &ParseOptions::default()).unwrap();

    let name = &atoms[0];
    assert_eq!(name.text, "JANE DOE");
    assert!(name.bold);
    assert_eq!(name.page, 1);
    assert!((name.x1 - 72.0).abs() < 0.01);
    assert!((name.y - 740.0).abs() < 0.01);
    assert!(name.x2 > name.x1);

    let email = atoms.iter().find(|a| a.text == "jane@example.com").unwrap();
    assert!(!email.bold);
}

#[test]
fn test_sections_from_pdf() {
    let layout = ResumeParser::new().analyze_bytes(&jane_doe_pdf()).unwrap();
    let tags: Vec<SectionTag> = layout.sections.iter().map(|s| s.tag).collect();

    assert_eq!(
        tags,
        vec![
            SectionTag::Profile,
            SectionTag::Experience,
            SectionTag::Education,
            SectionTag::Skills
        ]
    );
    // three header lines are consumed
    assert_eq!(layout.sections.line_count(), layout.lines.len() - 3);
}

#[test]
fn test_page_selection() {
    let pdf = build_pdf(&[
        vec![bold("JANE DOE", 72.0, 740.0)],
        vec![regular("Second page", 72.0, 740.0)],
    ]);

    let options = ParseOptions::new().with_pages(PageSelection::Pages(vec![2]));
    let resume = parse_bytes_with_options(&pdf, options).unwrap();
    assert_eq!(resume.raw_text, "Second page");

    let options = ParseOptions::new().with_pages(PageSelection::Pages(vec![5]));
    let err = parse_bytes_with_options(&pdf, options).unwrap_err();
    assert!(matches!(err, Error::PageOutOfRange(5, 2)));

    let options = ParseOptions::new()
        .lenient()
        .with_pages(PageSelection::Range(2..=5));
    let resume = parse_bytes_with_options(&pdf, options).unwrap();
    assert_eq!(resume.raw_text, "Second page");
}

#[test]
fn test_atom_ceiling() {
    let options = ParseOptions::new().with_max_atoms(3);
    let err = parse_bytes_with_options(&jane_doe_pdf(), options).unwrap_err();
    assert!(matches!(err, Error::TooManyAtoms { limit: 3, .. }));
    assert!(err.is_document_read());
}

#[test]
fn test_parse_file_and_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jane.pdf");
    std::fs::write(&path, jane_doe_pdf()).unwrap();

    let from_file = parse_file(&path).unwrap();
    let from_reader = parse_reader(Cursor::new(jane_doe_pdf())).unwrap();
    assert_eq!(from_file, from_reader);
    assert_eq!(from_file.profile.name, "JANE DOE");
}

#[test]
fn test_batch_parse() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.pdf");
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&good, jane_doe_pdf()).unwrap();
    std::fs::write(&bad, b"garbage bytes").unwrap();

    let results = ResumeParser::new().parse_files(&[good, bad]);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().profile.name, "JANE DOE");
    assert!(results[1].as_ref().unwrap_err().is_document_read());
}

#[test]
fn test_garbage_bytes_are_document_read_errors() {
    for data in [
        b"".to_vec(),
        b"hello world".to_vec(),
        b"%PDF-1.4\n1 0 obj".to_vec(),
        b"%PDF-9.9\n".to_vec(),
    ] {
        let err = parse_bytes(&data).unwrap_err();
        assert!(err.is_document_read(), "{:?}", err);
    }

    let truncated = &jane_doe_pdf()[..40];
    assert!(parse_bytes(truncated).unwrap_err().is_document_read());
}

#[test]
fn test_empty_page() {
    let resume = parse_bytes(&build_pdf(&[vec![]])).unwrap();
    assert!(resume.is_empty());
    assert_eq!(resume.raw_text, "");
}
