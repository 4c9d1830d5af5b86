mod assertions;
mod budget;
mod incumbent;
mod pack;
#[cfg(test)]
mod tests;

use crate::ordering::{order, Permutations, Strategy};
use crate::types::{Instance, Item, PlacedItem};
use budget::Budget;
use incumbent::Incumbent;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Caps on the search that the engine itself never needs but a caller MAY
/// supply to bound runtime. Leaving both `None` (the default) runs the
/// search to completion, exactly as the core algorithm is specified.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    pub node_budget: Option<u64>,
    pub time_budget: Option<Duration>,
}

impl SolverConfig {
    fn deadline(&self) -> Option<Instant> {
        self.time_budget.map(|d| Instant::now() + d)
    }
}

/// The result of a solve: either a feasible `best_height`/`best_layout`, or
/// `None` meaning no feasible placement was proved (either genuinely
/// infeasible, or the search was cut short by `budget_exhausted`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOutcome {
    pub best_height: Option<u64>,
    pub best_layout: Vec<PlacedItem>,
    pub solve_time: Duration,
    pub budget_exhausted: bool,
}

pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The core operation of §4.4: solves `instance` using its items in the
    /// order already given (the caller is responsible for any ordering
    /// heuristic). A fresh incumbent is used for every call.
    pub fn solve(&self, instance: &Instance) -> SolveOutcome {
        let start = Instant::now();
        let mut incumbent = Incumbent::new();
        let mut budget = Budget::new(&self.config);
        self.solve_into(instance, &instance.items, &mut incumbent, &mut budget);
        self.finish(incumbent, budget, start)
    }

    /// Convenience layer over `solve`: orders `instance`'s items per
    /// `strategy` first. `AllPermutations`, `Synthetic2` and `Synthetic4`
    /// solve multiple orderings against one shared incumbent, as specified.
    pub fn solve_with_strategy(&self, instance: &Instance, strategy: Strategy) -> SolveOutcome {
        let start = Instant::now();
        let mut incumbent = Incumbent::new();
        let mut budget = Budget::new(&self.config);

        match strategy {
            Strategy::AllPermutations => {
                for perm in Permutations::new(&instance.items) {
                    self.solve_into(instance, &perm, &mut incumbent, &mut budget);
                    if budget.exhausted {
                        break;
                    }
                }
            }
            Strategy::Synthetic2 | Strategy::Synthetic4 => {
                for &constituent in strategy.constituents() {
                    let ordered = order(&instance.items, constituent);
                    self.solve_into(instance, &ordered, &mut incumbent, &mut budget);
                    if budget.exhausted {
                        break;
                    }
                }
            }
            other => {
                let ordered = order(&instance.items, other);
                self.solve_into(instance, &ordered, &mut incumbent, &mut budget);
            }
        }

        self.finish(incumbent, budget, start)
    }

    fn solve_into(
        &self,
        instance: &Instance,
        ordered_items: &[Item],
        incumbent: &mut Incumbent,
        budget: &mut Budget,
    ) {
        if ordered_items.is_empty() {
            // §9: n = 0 is a trivial, fully-packed solution of height 0,
            // unlike the source, which falls through without recording one.
            if !incumbent.prunes(0) {
                incumbent.improve(0, &[]);
            }
            return;
        }

        let mut seq: Vec<PlacedItem> = ordered_items
            .iter()
            .map(|item| PlacedItem {
                x: 0,
                y: 0,
                width: item.width,
                height: item.height,
            })
            .collect();

        pack::pack(0, &mut seq, incumbent, instance, budget);
    }

    fn finish(&self, incumbent: Incumbent, budget: Budget, start: Instant) -> SolveOutcome {
        SolveOutcome {
            best_height: incumbent.best_height,
            best_layout: incumbent.best_layout,
            solve_time: start.elapsed(),
            budget_exhausted: budget.exhausted,
        }
    }
}
