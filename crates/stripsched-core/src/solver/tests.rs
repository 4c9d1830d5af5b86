use super::*;
use crate::bounds::{continuous_bound, first_bound};
use crate::types::Item;

fn instance(strip_width: u32, dims: &[(u32, u32)], rotation: bool) -> Instance {
    let items = dims.iter().map(|&(w, h)| Item::new(w, h)).collect();
    Instance::new(strip_width, items, rotation).unwrap()
}

#[test]
fn empty_instance_solves_to_height_zero() {
    let inst = instance(8, &[], false);
    let outcome = Solver::new(SolverConfig::default()).solve(&inst);
    assert_eq!(outcome.best_height, Some(0));
    assert!(outcome.best_layout.is_empty());
}

#[test]
fn area_lower_bound_always_holds() {
    let inst = instance(8, &[(2, 2), (1, 1), (4, 3), (4, 1)], false);
    let outcome = Solver::new(SolverConfig::default())
        .solve_with_strategy(&inst, Strategy::AreaHeight);
    let total_area: u64 = inst.items.iter().map(Item::area).sum();
    let best_height = outcome.best_height.unwrap();
    assert!(total_area <= inst.strip_width as u64 * best_height);
}

#[test]
fn bounds_sandwich_the_exact_optimum() {
    let inst = instance(5, &[(2, 3), (3, 2), (2, 2), (3, 3)], false);
    let outcome = Solver::new(SolverConfig::default())
        .solve_with_strategy(&inst, Strategy::AllPermutations);
    let best_height = outcome.best_height.unwrap();
    assert!(continuous_bound(&inst).unwrap() <= best_height);
    assert!(first_bound(&inst).unwrap() <= best_height);
}

#[test]
fn solving_twice_is_idempotent() {
    let inst = instance(8, &[(2, 2), (1, 1), (4, 3), (4, 1)], false);
    let solver = Solver::new(SolverConfig::default());
    let first = solver.solve_with_strategy(&inst, Strategy::AreaHeight);
    let second = solver.solve_with_strategy(&inst, Strategy::AreaHeight);
    assert_eq!(first.best_height, second.best_height);
    assert_eq!(first.best_layout, second.best_layout);
}

#[test]
fn rotation_never_makes_the_optimum_worse() {
    let fixed = instance(5, &[(2, 3), (3, 2), (2, 2), (3, 3)], false);
    let rotatable = instance(5, &[(2, 3), (3, 2), (2, 2), (3, 3)], true);
    let solver = Solver::new(SolverConfig::default());
    let without = solver.solve_with_strategy(&fixed, Strategy::AllPermutations);
    let with = solver.solve_with_strategy(&rotatable, Strategy::AllPermutations);
    assert!(with.best_height.unwrap() <= without.best_height.unwrap());
}

#[test]
fn exact_search_dominates_every_heuristic_ordering() {
    let inst = instance(8, &[(2, 2), (1, 1), (4, 3), (4, 1)], false);
    let solver = Solver::new(SolverConfig::default());
    let exact = solver
        .solve_with_strategy(&inst, Strategy::AllPermutations)
        .best_height
        .unwrap();

    for strategy in [
        Strategy::Height,
        Strategy::HeightWidth,
        Strategy::Width,
        Strategy::WidthHeight,
        Strategy::WidthHeightAsc,
        Strategy::Area,
        Strategy::AreaHeight,
        Strategy::AreaWidth,
        Strategy::Random,
    ] {
        let height = solver
            .solve_with_strategy(&inst, strategy)
            .best_height
            .unwrap();
        assert!(exact <= height, "{strategy:?} beat the exact search");
    }
}

#[test]
fn node_budget_surfaces_as_budget_exhausted() {
    let inst = instance(8, &[(2, 2), (1, 1), (4, 3), (4, 1)], false);
    let tiny_budget = SolverConfig {
        node_budget: Some(1),
        time_budget: None,
    };
    let outcome =
        Solver::new(tiny_budget).solve_with_strategy(&inst, Strategy::AllPermutations);
    assert!(outcome.budget_exhausted);
}
