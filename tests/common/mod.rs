//! In-memory PDF fixtures built with lopdf.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// One text run placed on a page.
#[derive(Debug, Clone)]
pub struct Run {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub bold: bool,
}

pub fn regular(text: &'static str, x: f32, y: f32) -> Run {
    Run {
        text,
        x,
        y,
        bold: false,
    }
}

pub fn bold(text: &'static str, x: f32, y: f32) -> Run {
    Run {
        text,
        x,
        y,
        bold: true,
    }
}

/// Build a letter-size PDF, one content stream per page, Helvetica 11pt.
pub fn build_pdf(pages: &[Vec<Run>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_font = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_font = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_font,
            "F2" => bold_font,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for runs in pages {
        let mut operations = Vec::new();
        for run in runs {
            let font = if run.bold { "F2" } else { "F1" };
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec![font.into(), 11.into()]));
            operations.push(Operation::new("Td", vec![run.x.into(), run.y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(run.text)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("save pdf");
    buffer
}

/// A one-page résumé with profile, experience, education and skills.
pub fn jane_doe_runs() -> Vec<Run> {
    vec![
        bold("JANE DOE", 72.0, 740.0),
        regular("jane@example.com", 72.0, 726.0),
        regular("Austin, TX", 72.0, 712.0),
        bold("EXPERIENCE", 72.0, 680.0),
        bold("Acme Corp", 72.0, 664.0),
        regular("- Built systems", 72.0, 652.0),
        bold("EDUCATION", 72.0, 620.0),
        bold("Rice University", 72.0, 604.0),
        regular("2014 - 2018", 400.0, 604.0),
        regular("Bachelor of Science in Physics", 72.0, 592.0),
        bold("SKILLS", 72.0, 560.0),
        regular("Rust, Python, SQL", 72.0, 546.0),
    ]
}

pub fn jane_doe_pdf() -> Vec<u8> {
    build_pdf(&[jane_doe_runs()])
}
