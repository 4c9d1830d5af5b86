use crate::types::PlacedItem;

/// Computes the complete, feasible set of candidate bottom-left positions
/// for the next item, given the already-placed items and the minimum width
/// among the items still waiting to be placed.
///
/// Grounded in the Martello-Vigo corner-point construction: sort placed
/// items by (top, right) descending, scan for the items whose right edge
/// extends the skyline ("extreme" items), then read the staircase corners
/// off that extreme sequence. Filtering happens with `retain`, not a
/// remove-while-iterating loop, so no candidate is skipped.
pub fn corners(placed: &[PlacedItem], out_min_width: u32, strip_width: u32) -> Vec<(u32, u32)> {
    if placed.is_empty() {
        return vec![(0, 0)];
    }

    let mut sorted: Vec<&PlacedItem> = placed.iter().collect();
    sorted.sort_by(|a, b| (b.top(), b.right()).cmp(&(a.top(), a.right())));

    let mut extreme: Vec<&PlacedItem> = Vec::new();
    let mut x_max = 0u32;
    for item in &sorted {
        if item.right() > x_max {
            x_max = item.right();
            extreme.push(item);
        }
    }

    let m = extreme.len();
    let mut result = Vec::with_capacity(m + 1);
    result.push((0, extreme[0].top()));
    for k in 1..m {
        result.push((extreme[k - 1].right(), extreme[k].top()));
    }
    result.push((extreme[m - 1].right(), 0));

    result.retain(|(x, _)| *x + out_min_width <= strip_width);
    result
}
