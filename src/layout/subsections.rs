//! Subsection splitting: one section into per-entity runs of lines.

use std::collections::HashMap;

use crate::model::Line;
use crate::scoring::patterns::has_bullet;

/// A line with this many words reads as prose rather than a header.
const DESCRIPTION_MIN_WORDS: usize = 8;

/// Split a section's lines into subsections.
///
/// A vertical gap larger than `ratio` times the typical gap starts a new
/// subsection; page transitions never do. If that yields a single
/// subsection, lines that start bold (and carry no bullet) start one
/// instead. Subsections are never empty and concatenate back to `lines`.
pub fn split_subsections(lines: &[Line], ratio: f32, default_gap: f32) -> Vec<&[Line]> {
    if lines.is_empty() {
        return Vec::new();
    }

    let typical = typical_line_gap(lines).unwrap_or(default_gap);
    let threshold = typical * ratio;
    let by_gap = split_at(lines, |prev, line| {
        prev.page() == line.page() && prev.y() - line.y() > threshold
    });
    if by_gap.len() > 1 {
        log::trace!(
            "split {} lines into {} subsections by gap > {:.1}",
            lines.len(),
            by_gap.len(),
            threshold
        );
        return by_gap;
    }

    split_at(lines, |_, line| line.starts_bold() && !has_bullet(line.text()))
}

/// Most frequent rounded vertical gap between consecutive lines on one page.
///
/// Needs at least two occurrences; ties go to the gap that reached the
/// top count first.
pub fn typical_line_gap(lines: &[Line]) -> Option<f32> {
    let mut histogram: HashMap<i64, usize> = HashMap::new();
    let mut best: Option<(i64, usize)> = None;

    for pair in lines.windows(2) {
        let (prev, line) = (&pair[0], &pair[1]);
        if prev.page() != line.page() {
            continue;
        }
        let gap = (prev.y() - line.y()).abs().round() as i64;
        if gap == 0 {
            continue;
        }

        let count = histogram.entry(gap).or_insert(0);
        *count += 1;
        if best.map_or(true, |(_, top)| *count > top) {
            best = Some((gap, *count));
        }
    }

    best.filter(|&(_, count)| count >= 2)
        .map(|(gap, _)| gap as f32)
}

/// Index of the first content line (bullet, else a long line).
///
/// `None` means the whole subsection is header.
pub fn descriptions_line_index(lines: &[Line]) -> Option<usize> {
    lines
        .iter()
        .position(|l| has_bullet(l.text()))
        .or_else(|| {
            lines
                .iter()
                .position(|l| l.word_count() >= DESCRIPTION_MIN_WORDS)
        })
}

/// Split before every line for which `starts_new(prev, line)` holds.
fn split_at<F>(lines: &[Line], starts_new: F) -> Vec<&[Line]>
where
    F: Fn(&Line, &Line) -> bool,
{
    let mut parts = Vec::new();
    let mut start = 0;
    for i in 1..lines.len() {
        if starts_new(&lines[i - 1], &lines[i]) {
            parts.push(&lines[start..i]);
            start = i;
        }
    }
    parts.push(&lines[start..]);
    parts
}
