//! The concrete end-to-end scenarios: six hand-picked instances with known
//! optimal heights, solved exactly via `Strategy::AllPermutations` and
//! checked against the public API only.

use stripsched_core::{Instance, Item, PlacedItem, Solver, SolverConfig, Strategy};

fn instance(strip_width: u32, dims: &[(u32, u32)], rotation: bool) -> Instance {
    let items = dims.iter().map(|&(w, h)| Item::new(w, h)).collect();
    Instance::new(strip_width, items, rotation).unwrap()
}

fn assert_layout_valid(layout: &[PlacedItem], strip_width: u32) {
    for (idx, item) in layout.iter().enumerate() {
        assert!(item.x + item.width <= strip_width, "item {idx} escapes the strip");
        for (other_idx, other) in layout.iter().enumerate() {
            if idx != other_idx {
                assert!(!item.overlaps(other), "items {idx} and {other_idx} overlap");
            }
        }
    }
}

#[test]
fn scenario_1_four_items_width_8() {
    let inst = instance(8, &[(2, 2), (1, 1), (4, 3), (4, 1)], false);
    let outcome = Solver::new(SolverConfig::default())
        .solve_with_strategy(&inst, Strategy::AllPermutations);
    assert_eq!(outcome.best_height, Some(3));
    assert_layout_valid(&outcome.best_layout, inst.strip_width);
}

#[test]
fn scenario_2_three_equal_items_stack_to_height_3() {
    let inst = instance(4, &[(4, 1), (4, 1), (4, 1)], false);
    let outcome = Solver::new(SolverConfig::default())
        .solve_with_strategy(&inst, Strategy::AllPermutations);
    assert_eq!(outcome.best_height, Some(3));
    assert_layout_valid(&outcome.best_layout, inst.strip_width);
}

#[test]
fn scenario_3_four_items_width_5_optimum_is_5() {
    let inst = instance(5, &[(2, 3), (3, 2), (2, 2), (3, 3)], false);
    let outcome = Solver::new(SolverConfig::default())
        .solve_with_strategy(&inst, Strategy::AllPermutations);
    assert_eq!(outcome.best_height, Some(5));
    assert_layout_valid(&outcome.best_layout, inst.strip_width);
}

#[test]
fn scenario_4_three_items_width_3_optimum_is_4() {
    let inst = instance(3, &[(3, 2), (2, 2), (1, 2)], false);
    let outcome = Solver::new(SolverConfig::default())
        .solve_with_strategy(&inst, Strategy::AllPermutations);
    assert_eq!(outcome.best_height, Some(4));
    assert_layout_valid(&outcome.best_layout, inst.strip_width);
}

#[test]
fn scenario_5_single_item_packs_at_origin() {
    let inst = instance(10, &[(7, 5)], false);
    let outcome = Solver::new(SolverConfig::default())
        .solve_with_strategy(&inst, Strategy::AllPermutations);
    assert_eq!(outcome.best_height, Some(5));
    assert_eq!(outcome.best_layout.len(), 1);
    assert_eq!(outcome.best_layout[0].x, 0);
    assert_eq!(outcome.best_layout[0].y, 0);
}

#[test]
fn scenario_6_rotation_halves_required_height() {
    let rotated = instance(3, &[(1, 3), (3, 1)], true);
    let fixed = instance(3, &[(1, 3), (3, 1)], false);
    let solver = Solver::new(SolverConfig::default());

    let with_rotation = solver.solve_with_strategy(&rotated, Strategy::AllPermutations);
    let without_rotation = solver.solve_with_strategy(&fixed, Strategy::AllPermutations);

    assert_eq!(with_rotation.best_height, Some(2));
    assert_eq!(without_rotation.best_height, Some(4));
    assert_layout_valid(&with_rotation.best_layout, rotated.strip_width);
}
