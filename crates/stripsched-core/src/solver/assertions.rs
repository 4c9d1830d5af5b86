use crate::types::PlacedItem;

/// True when every placed item lies within `[0, strip_width)` horizontally.
pub(super) fn all_in_strip(seq: &[PlacedItem], strip_width: u32) -> bool {
    seq.iter().all(|item| item.right() <= strip_width)
}

/// True when no two placed items' interiors overlap.
pub(super) fn no_overlaps(seq: &[PlacedItem]) -> bool {
    seq.iter()
        .enumerate()
        .all(|(i, a)| seq[i + 1..].iter().all(|b| !a.overlaps(b)))
}
