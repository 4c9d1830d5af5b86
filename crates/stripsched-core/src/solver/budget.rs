use super::SolverConfig;
use std::time::Instant;

/// Optional node-count / wall-clock cap on the search. Absent a configured
/// budget, `check` always allows the search to continue; the engine never
/// consults a clock or counts nodes unless asked to.
pub(super) struct Budget {
    node_budget: Option<u64>,
    deadline: Option<Instant>,
    nodes_visited: u64,
    pub(super) exhausted: bool,
}

impl Budget {
    pub(super) fn new(config: &SolverConfig) -> Self {
        Self {
            node_budget: config.node_budget,
            deadline: config.deadline(),
            nodes_visited: 0,
            exhausted: false,
        }
    }

    /// Returns false once the budget is spent; the caller must return
    /// immediately without branching further.
    pub(super) fn allow(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.nodes_visited += 1;
        if let Some(limit) = self.node_budget {
            if self.nodes_visited > limit {
                self.exhausted = true;
                return false;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.exhausted = true;
                return false;
            }
        }
        true
    }
}
