//! Tests for the knapsack solvers.

use packer_core::{Hundredths, PackingScore, ProblemInstance, Selection};
use packer_parser::LineParser;
use packer_test::instances::{best_score, instance, random_instance, seeded_rng};
use packer_test::scenarios::SOLVED;

use super::*;

fn solvers() -> Vec<Box<dyn KnapsackSolver>> {
    vec![
        build_solver(SolverType::Exhaustive),
        build_solver(SolverType::DynamicProgramming),
    ]
}

fn solve_all(instance: &ProblemInstance) -> Vec<Selection> {
    solvers().iter().map(|solver| solver.solve(instance)).collect()
}

#[test]
fn test_build_solver() {
    let exhaustive = build_solver(SolverType::Exhaustive);
    let dynamic = build_solver(SolverType::DynamicProgramming);
    assert_eq!(exhaustive.solver_type_name(), "Exhaustive");
    assert_eq!(dynamic.solver_type_name(), "DynamicProgramming");
}

#[test]
fn test_solved_scenarios() {
    let parser = LineParser::default();
    for scenario in SOLVED {
        let instance = parser.parse(1, scenario.line).unwrap();
        for solver in solvers() {
            let selection = solver.solve(&instance);
            assert_eq!(
                selection.render(),
                scenario.expected,
                "{} with {}",
                scenario.name,
                solver.solver_type_name()
            );
        }
    }
}

#[test]
fn test_capacity_zero_selects_nothing() {
    // A weightless item still cannot be packed into a zero-capacity package.
    let instance = instance(0, &[(0, 500), (100, 900)]);
    for selection in solve_all(&instance) {
        assert!(selection.is_empty());
        assert_eq!(selection.render(), "-");
    }
}

#[test]
fn test_no_items_selects_nothing() {
    let instance = ProblemInstance::new(Hundredths::from_units(10), Vec::new()).unwrap();
    for selection in solve_all(&instance) {
        assert!(selection.is_empty());
    }
}

#[test]
fn test_nothing_fits() {
    let instance = instance(1000, &[(1001, 500), (2000, 900)]);
    for selection in solve_all(&instance) {
        assert!(selection.is_empty());
    }
}

#[test]
fn test_weightless_item_with_cost_is_included() {
    let instance = instance(500, &[(400, 1000), (0, 100), (600, 5000)]);
    for selection in solve_all(&instance) {
        assert_eq!(selection.indexes(), &[1, 2]);
        assert_eq!(selection.total_weight(), Hundredths::from_raw(400));
    }
}

#[test]
fn test_zero_cost_items_are_never_selected() {
    let instance = instance(1000, &[(0, 0), (100, 500), (0, 0), (200, 0)]);
    for selection in solve_all(&instance) {
        assert_eq!(selection.indexes(), &[2]);
    }
}

#[test]
fn test_equal_cost_prefers_lighter() {
    let instance = instance(800, &[(600, 500), (300, 500)]);
    for selection in solve_all(&instance) {
        assert_eq!(selection.indexes(), &[2]);
    }
}

#[test]
fn test_equal_cost_and_weight_prefers_fewer_items() {
    // {1} and {2, 3} both cost 10 and weigh 4.
    let instance = instance(500, &[(400, 1000), (200, 500), (200, 500)]);
    for selection in solve_all(&instance) {
        assert_eq!(selection.indexes(), &[1]);
    }
}

#[test]
fn test_full_tie_prefers_lowest_differing_index() {
    // {1, 4} and {2, 3} are equal on cost, weight and count.
    let instance = instance(400, &[(300, 600), (200, 500), (200, 200), (100, 100)]);
    let expected = PackingScore::of(Hundredths::from_raw(700), Hundredths::from_raw(400), 2);
    for selection in solve_all(&instance) {
        assert_eq!(selection.score(), expected);
        assert_eq!(selection.indexes(), &[1, 4]);
    }

    let identical = instance_of_identical_items();
    for selection in solve_all(&identical) {
        assert_eq!(selection.indexes(), &[1, 2]);
    }
}

fn instance_of_identical_items() -> ProblemInstance {
    instance(200, &[(100, 100), (100, 100), (100, 100)])
}

#[test]
fn test_sixteen_items() {
    let items: Vec<(u64, u64)> = (1..=16).map(|i| (i * 100, i * 150)).collect();
    let instance = instance(2000, &items);
    let expected = best_score(&instance);
    for selection in solve_all(&instance) {
        assert_eq!(selection.score(), expected);
        assert!(selection.total_weight() <= instance.capacity());
    }
}

#[test]
fn test_solvers_agree_with_reference() {
    let mut rng = seeded_rng(42);
    for round in 0..300 {
        let item_count = round % 12;
        let instance = random_instance(&mut rng, item_count);
        let expected = best_score(&instance);

        let selections = solve_all(&instance);
        for selection in &selections {
            assert_eq!(selection.score(), expected, "round {}: {:?}", round, instance);
            assert!(selection.total_weight() <= instance.capacity());
        }
        assert_eq!(selections[0], selections[1], "round {}: {:?}", round, instance);
    }
}

#[test]
fn test_selection_indexes_are_ascending_and_rendering_is_stable() {
    let mut rng = seeded_rng(7);
    for _ in 0..50 {
        let instance = random_instance(&mut rng, 10);
        for selection in solve_all(&instance) {
            assert!(selection.indexes().windows(2).all(|pair| pair[0] < pair[1]));
            assert_eq!(selection.render(), selection.render());
            assert_eq!(selection.render(), selection.to_string());
        }
    }
}

#[test]
fn test_solving_is_deterministic() {
    let instance = random_instance(&mut seeded_rng(3), 12);
    for solver in solvers() {
        assert_eq!(solver.solve(&instance), solver.solve(&instance));
    }
}

#[test]
fn test_subset_score() {
    let instance = instance(1000, &[(100, 200), (300, 400), (500, 600)]);
    let subset = Subset::EMPTY.with(0).with(2);
    assert_eq!(
        subset.score(instance.items()),
        PackingScore::of(Hundredths::from_raw(800), Hundredths::from_raw(600), 2)
    );
    assert_eq!(subset.to_selection(&instance).indexes(), &[1, 3]);
    assert_eq!(Subset::EMPTY.score(instance.items()), PackingScore::ZERO);
}

#[test]
fn test_subset_tie_break() {
    let a = Subset::from_bits(0b1001);
    let b = Subset::from_bits(0b0110);
    assert!(a.wins_tie_against(b));
    assert!(!b.wins_tie_against(a));
    assert!(!a.wins_tie_against(a));
    assert!(a.wins_tie_against(Subset::EMPTY));
}
