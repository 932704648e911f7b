//! Content-stream interpretation.
//!
//! Walks the text operators of one page and emits a positioned, styled
//! [`TextAtom`] for every string shown.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use super::backend::{get_number_from_value, BackendFontInfo, ContentOp, PdfValue};
use crate::model::{is_bold_font, TextAtom};

/// Width of a glyph, in 1/1000 em, assumed when the font has no widths table.
const DEFAULT_GLYPH_WIDTH: f32 = 500.0;

/// A TJ adjustment above this (in 1/1000 em) reads as a word space.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Adjacent runs closer than this fraction of an em are merged.
const COALESCE_GAP_EM: f32 = 0.15;

/// Text matrix and line matrix of a `BT` ... `ET` block.
#[derive(Debug, Clone, Copy)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
    // Start of the current line; Td/TD/T* are relative to it.
    line_e: f32,
    line_f: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            line_e: 0.0,
            line_f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        *self = Self {
            a,
            b,
            c,
            d,
            e,
            f,
            line_e: e,
            line_f: f,
        };
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.line_e += tx * self.a + ty * self.c;
        self.line_f += tx * self.b + ty * self.d;
        self.e = self.line_e;
        self.f = self.line_f;
    }

    /// Move along the baseline after showing text.
    fn advance(&mut self, tx: f32) {
        self.e += tx * self.a;
        self.f += tx * self.b;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Text state parameters that survive across `BT` blocks.
#[derive(Debug, Clone)]
struct TextState {
    font: Vec<u8>,
    font_size: f32,
    char_spacing: f32,
    word_spacing: f32,
    /// Horizontal scaling as a fraction (Tz / 100)
    horizontal_scale: f32,
    leading: f32,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            font: Vec::new(),
            font_size: 12.0,
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scale: 1.0,
            leading: 0.0,
        }
    }
}

/// An emitted run before it becomes an atom; keeps the em size for merging.
#[derive(Debug, Clone)]
struct Run {
    atom: TextAtom,
    em: f32,
}

/// Interprets the content stream of one page.
///
/// `decode` turns the bytes of a shown string into text given the current
/// font resource name.
pub struct PageInterpreter<'a, D>
where
    D: Fn(&[u8], &[u8]) -> String,
{
    page: u32,
    fonts: &'a HashMap<Vec<u8>, BackendFontInfo>,
    decode: D,
    state: TextState,
    matrix: TextMatrix,
    in_text_block: bool,
    runs: Vec<Run>,
}

impl<'a, D> PageInterpreter<'a, D>
where
    D: Fn(&[u8], &[u8]) -> String,
{
    /// Create an interpreter for page `page` (1-indexed).
    pub fn new(page: u32, fonts: &'a HashMap<Vec<u8>, BackendFontInfo>, decode: D) -> Self {
        Self {
            page,
            fonts,
            decode,
            state: TextState::default(),
            matrix: TextMatrix::default(),
            in_text_block: false,
            runs: Vec::new(),
        }
    }

    /// Run every operation and return the page's atoms in stream order.
    pub fn run(mut self, ops: &[ContentOp]) -> Vec<TextAtom> {
        for op in ops {
            self.apply(op);
        }
        coalesce(self.runs)
    }

    fn apply(&mut self, op: &ContentOp) {
        match op.operator.as_str() {
            "BT" => {
                self.in_text_block = true;
                self.matrix = TextMatrix::default();
            }
            "ET" => self.in_text_block = false,
            "Tf" => {
                if let Some(PdfValue::Name(name)) = op.operands.first() {
                    self.state.font = name.clone();
                }
                if let Some(size) = op.number(1) {
                    self.state.font_size = size;
                }
            }
            "Tc" => self.state.char_spacing = op.number(0).unwrap_or(0.0),
            "Tw" => self.state.word_spacing = op.number(0).unwrap_or(0.0),
            "Tz" => self.state.horizontal_scale = op.number(0).unwrap_or(100.0) / 100.0,
            "TL" => self.state.leading = op.number(0).unwrap_or(0.0),
            "Td" => {
                if let (Some(tx), Some(ty)) = (op.number(0), op.number(1)) {
                    self.matrix.translate(tx, ty);
                }
            }
            "TD" => {
                if let (Some(tx), Some(ty)) = (op.number(0), op.number(1)) {
                    self.state.leading = -ty;
                    self.matrix.translate(tx, ty);
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    self.matrix.set(
                        op.number(0).unwrap_or(1.0),
                        op.number(1).unwrap_or(0.0),
                        op.number(2).unwrap_or(0.0),
                        op.number(3).unwrap_or(1.0),
                        op.number(4).unwrap_or(0.0),
                        op.number(5).unwrap_or(0.0),
                    );
                }
            }
            "T*" => self.next_line(),
            "Tj" => {
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    self.show(&[PdfValue::Str(bytes.clone())]);
                }
            }
            "TJ" => {
                if let Some(PdfValue::Array(items)) = op.operands.first() {
                    self.show(items);
                }
            }
            "'" => {
                self.next_line();
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    self.show(&[PdfValue::Str(bytes.clone())]);
                }
            }
            "\"" => {
                self.state.word_spacing = op.number(0).unwrap_or(self.state.word_spacing);
                self.state.char_spacing = op.number(1).unwrap_or(self.state.char_spacing);
                self.next_line();
                if let Some(PdfValue::Str(bytes)) = op.operands.get(2) {
                    self.show(&[PdfValue::Str(bytes.clone())]);
                }
            }
            _ => {}
        }
    }

    fn next_line(&mut self) {
        let leading = self.state.leading;
        self.matrix.translate(0.0, -leading);
    }

    /// Show a sequence of strings and TJ adjustments as one run.
    fn show(&mut self, items: &[PdfValue]) {
        if !self.in_text_block {
            return;
        }

        let fonts = self.fonts;
        let font = fonts.get(&self.state.font);
        let (x1, y) = self.matrix.position();
        let mut text = String::new();

        for item in items {
            match item {
                PdfValue::Str(bytes) => {
                    let decoded = (self.decode)(self.state.font.as_slice(), bytes);
                    let advance = self.string_advance(font, bytes, &decoded);
                    self.matrix.advance(advance);
                    text.push_str(&decoded);
                }
                other => {
                    let Some(adjust) = get_number_from_value(other) else {
                        continue;
                    };
                    self.matrix.advance(
                        -adjust / 1000.0 * self.state.font_size * self.state.horizontal_scale,
                    );
                    if -adjust > TJ_SPACE_THRESHOLD
                        && !text.is_empty()
                        && !text.ends_with(char::is_whitespace)
                    {
                        text.push(' ');
                    }
                }
            }
        }

        let text: String = text.nfkc().collect();
        if text.trim().is_empty() {
            return;
        }

        let (x2, _) = self.matrix.position();
        let base_font = font.map(|f| f.base_font.as_str()).unwrap_or_default();
        self.runs.push(Run {
            atom: TextAtom::new(text, x1, x2.max(x1), y, self.page, is_bold_font(base_font)),
            em: self.state.font_size * self.matrix.scale(),
        });
    }

    /// Horizontal displacement of one shown string, in text space.
    fn string_advance(&self, font: Option<&BackendFontInfo>, bytes: &[u8], decoded: &str) -> f32 {
        let state = &self.state;
        let glyphs: Vec<(f32, bool)> = match font.and_then(|f| f.widths.as_ref()) {
            Some(widths) => bytes
                .iter()
                .map(|&b| (widths.width(b as u32), b == b' '))
                .collect(),
            None => decoded
                .chars()
                .map(|c| (DEFAULT_GLYPH_WIDTH, c == ' '))
                .collect(),
        };

        glyphs
            .into_iter()
            .map(|(w, is_space)| {
                let spacing = state.char_spacing + if is_space { state.word_spacing } else { 0.0 };
                (w / 1000.0 * state.font_size + spacing) * state.horizontal_scale
            })
            .sum()
    }
}

/// Merge runs a generator split mid-word (one show operator per glyph).
fn coalesce(runs: Vec<Run>) -> Vec<TextAtom> {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());

    for run in runs {
        if let Some(prev) = merged.last_mut() {
            let gap = run.atom.x1 - prev.atom.x2;
            let em = prev.em.max(run.em);
            let joinable = prev.atom.page == run.atom.page
                && prev.atom.bold == run.atom.bold
                && (prev.atom.y - run.atom.y).abs() < 0.5
                && gap > -COALESCE_GAP_EM * em
                && gap < COALESCE_GAP_EM * em;
            if joinable {
                prev.atom.text.push_str(&run.atom.text);
                prev.atom.x2 = run.atom.x2;
                continue;
            }
        }
        merged.push(run);
    }

    merged.into_iter().map(|r| r.atom).collect()
}
