//! Line assembly: atoms to visual lines in reading order.

use crate::model::{Line, TextAtom};

/// Group atoms into lines, top to bottom and left to right.
///
/// Atoms are stably sorted by page, then by descending baseline. Walking the
/// sorted sequence, a new line starts whenever the page changes or the
/// baseline moves by more than `tolerance` from the previous atom.
pub fn assemble_lines(atoms: &[TextAtom], tolerance: f32) -> Vec<Line> {
    let mut sorted: Vec<TextAtom> = atoms.to_vec();
    sorted.sort_by(|a, b| a.page.cmp(&b.page).then_with(|| b.y.total_cmp(&a.y)));

    let mut lines = Vec::new();
    let mut current: Vec<TextAtom> = Vec::new();

    for atom in sorted {
        if let Some(prev) = current.last() {
            if !prev.same_line(&atom, tolerance) {
                lines.push(Line::from_atoms(std::mem::take(&mut current)));
            }
        }
        current.push(atom);
    }
    if !current.is_empty() {
        lines.push(Line::from_atoms(current));
    }

    log::debug!("assembled {} lines from {} atoms", lines.len(), atoms.len());
    lines
}

/// Flatten lines back into atoms in reading order.
pub fn flatten(lines: &[Line]) -> Vec<TextAtom> {
    lines.iter().flat_map(|l| l.atoms().iter().cloned()).collect()
}

/// Line texts joined with newlines.
pub fn raw_text(lines: &[Line]) -> String {
    lines.iter().map(Line::text).collect::<Vec<_>>().join("\n")
}
