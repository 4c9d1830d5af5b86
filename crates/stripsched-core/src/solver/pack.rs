use super::assertions;
use super::budget::Budget;
use super::incumbent::Incumbent;
use crate::corners::corners;
use crate::types::{Instance, PlacedItem};

/// Depth-first recursion over corner-point placements of `seq[i..]`. Mutates
/// `seq` in place, restoring any rotation swap before returning so sibling
/// branches see an untouched slot, and deep-copies into `incumbent` only on
/// improvement.
pub(super) fn pack(
    i: usize,
    seq: &mut [PlacedItem],
    incumbent: &mut Incumbent,
    instance: &Instance,
    budget: &mut Budget,
) {
    if !budget.allow() {
        return;
    }

    let n = seq.len();
    if i != 0 {
        let overall_height = seq[..i].iter().map(PlacedItem::top).max().unwrap();
        if incumbent.prunes(overall_height as u64) {
            log::trace!("prune at depth {i}: height {overall_height} cannot beat the incumbent");
            return;
        }
        if i == n {
            debug_assert!(assertions::all_in_strip(seq, instance.strip_width), "item placed outside the strip");
            debug_assert!(assertions::no_overlaps(seq), "overlap detected in a completed layout");
            log::debug!("new incumbent: height {overall_height}");
            incumbent.improve(overall_height as u64, seq);
            return;
        }
    }

    let out_min_width = seq[i..]
        .iter()
        .map(|p| if instance.rotation { p.width.min(p.height) } else { p.width })
        .min()
        .unwrap_or(0);

    let cps = corners(&seq[..i], out_min_width, instance.strip_width);

    for (cx, cy) in cps {
        if cx + seq[i].width <= instance.strip_width {
            log::trace!("branch at depth {i}: place item at ({cx}, {cy})");
            seq[i].x = cx;
            seq[i].y = cy;
            pack(i + 1, seq, incumbent, instance, budget);
            if budget.exhausted {
                return;
            }
        }

        if instance.rotation && cx + seq[i].height <= instance.strip_width {
            std::mem::swap(&mut seq[i].width, &mut seq[i].height);
            seq[i].x = cx;
            seq[i].y = cy;
            pack(i + 1, seq, incumbent, instance, budget);
            std::mem::swap(&mut seq[i].width, &mut seq[i].height);
            if budget.exhausted {
                return;
            }
        }
    }
}
