//! Bullet-list extraction.

use crate::model::Line;
use crate::scoring::patterns::{BulletGlyph, BULLET_GLYPHS};

/// Turn content lines into list items.
///
/// The glyph marking the most lines is used as the separator (ties go to
/// the glyph listed first). Without any glyph, every non-blank line is one
/// item.
pub fn extract_bullets(lines: &[Line]) -> Vec<String> {
    let Some(glyph) = dominant_glyph(lines) else {
        return lines
            .iter()
            .map(|l| l.text().trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    };

    let items = if glyph.leading_only {
        split_leading(lines, glyph.glyph)
    } else {
        let joined = lines.iter().map(Line::text).collect::<Vec<_>>().join(" ");
        joined.split(glyph.glyph).map(str::to_string).collect()
    };

    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// The glyph that marks the most lines.
pub fn dominant_glyph(lines: &[Line]) -> Option<&'static BulletGlyph> {
    let mut best: Option<(&'static BulletGlyph, usize)> = None;
    for glyph in BULLET_GLYPHS {
        let count = lines.iter().filter(|l| glyph.marks(l.text())).count();
        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((glyph, count));
        }
    }
    best.map(|(glyph, _)| glyph)
}

/// Items start at lines opening with `glyph`; other lines continue the item.
fn split_leading(lines: &[Line], glyph: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for line in lines {
        let text = line.text().trim();
        if let Some(rest) = text.strip_prefix(glyph) {
            items.push(rest.trim().to_string());
        } else if let Some(last) = items.last_mut() {
            last.push(' ');
            last.push_str(text);
        } else {
            items.push(text.to_string());
        }
    }
    items
}
