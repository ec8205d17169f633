//! Optimal chain reconstruction on solved samples.

use mrsolve::application::solve_model;
use mrsolve::domain::{reconstruct, samples, Action, ChainTree, Model, Solver};
use mrsolve::tree_traits::ToTermTree;
use mrsolve::util::testing;

#[test]
fn given_reference_sample_when_reconstructing_then_two_chains_keep_first() {
    // Arrange
    testing::init_test_setup();
    let model = samples::reference();
    let mut solver = Solver::new();
    solver.solve(&model).unwrap();

    // Act
    let tree = reconstruct(solver.stages(), model.initial_age()).unwrap();

    // Assert
    let paths: Vec<String> = tree.paths().iter().map(|p| p.to_string()).collect();
    assert_eq!(paths, vec!["R K K R SELL", "R R K K SELL"]);
    assert_eq!(tree.count(), 2);
    assert!(matches!(tree, ChainTree::Fork { ref prefix, .. } if prefix == &vec![Action::Replace]));
}

#[test]
fn given_aarf_sample_when_reconstructing_then_every_chain_spans_horizon() {
    let model = samples::aarf();

    let report = solve_model(&model).unwrap();

    assert!(!report.chains.is_empty());
    for chain in &report.chains {
        assert_eq!(chain.actions().len(), model.decision_years());
        let mut age = model.initial_age();
        for action in chain.actions() {
            age = action.next_age(age);
            assert!(age <= model.max_age(), "chain {chain} exceeds max age");
        }
    }
}

#[test]
fn given_reference_chain_tree_when_rendering_then_forks_after_first_replace() {
    let report = solve_model(&samples::reference()).unwrap();

    let tree = report.chain_tree.to_tree_string();

    assert_eq!(tree.root, "START R");
    assert_eq!(tree.leaves[0].root, "K K R SELL");
    assert_eq!(tree.leaves[1].root, "R K K SELL");
}

#[test]
fn given_empty_horizon_when_solving_then_single_sell_chain() {
    let model = Model::new(0, 1, 3, 10, Vec::new()).unwrap();

    let report = solve_model(&model).unwrap();

    assert_eq!(report.optimal_value, None);
    assert_eq!(report.chains.len(), 1);
    assert_eq!(report.chains[0].to_string(), "SELL");
}
