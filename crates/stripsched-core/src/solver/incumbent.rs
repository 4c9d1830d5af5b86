use crate::types::PlacedItem;

/// The best feasible height found so far, threaded through the recursion as
/// a `&mut` parameter rather than a module global, so repeat solves never
/// leak state between calls.
#[derive(Debug, Default)]
pub(super) struct Incumbent {
    pub best_height: Option<u64>,
    pub best_layout: Vec<PlacedItem>,
}

impl Incumbent {
    pub(super) fn new() -> Self {
        Self {
            best_height: None,
            best_layout: Vec::new(),
        }
    }

    /// True when `height` can no longer beat the incumbent (the "+inf"
    /// sentinel never prunes, since `None` compares as `Some(_) < None` is
    /// undefined here -- an unset incumbent simply never triggers this).
    pub(super) fn prunes(&self, height: u64) -> bool {
        matches!(self.best_height, Some(best) if height >= best)
    }

    pub(super) fn improve(&mut self, height: u64, layout: &[PlacedItem]) {
        self.best_height = Some(height);
        self.best_layout = layout.to_vec();
    }
}
