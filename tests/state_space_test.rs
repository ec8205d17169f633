//! Tests for StateSpaceBuilder on the reference sample.

use std::collections::HashSet;

use mrsolve::domain::{samples, StateSpaceBuilder, INITIAL_DECISION_YEAR};
use mrsolve::util::testing;

#[test]
fn given_reference_sample_when_building_then_reachable_ages_per_year() {
    // Arrange
    testing::init_test_setup();
    let model = samples::reference();

    // Act
    let space = StateSpaceBuilder::new().build(&model);

    // Assert
    assert_eq!(space.decision_years(), 4);
    assert_eq!(space.ages(0), vec![3]);
    assert_eq!(space.ages(1), vec![1, 4]);
    assert_eq!(space.ages(2), vec![1, 2, 5]);
    assert_eq!(space.ages(3), vec![1, 2, 3, 6]);

    let mut horizon: Vec<usize> = space.horizon().map(|n| n.machine_age).collect();
    horizon.sort_unstable();
    assert_eq!(horizon, vec![1, 2, 3, 4]);
    assert!(space.horizon().all(|n| n.is_horizon()));
}

#[test]
fn given_aarf_sample_when_building_then_no_duplicate_ages_in_any_year() {
    let model = samples::aarf();

    let space = StateSpaceBuilder::new().build(&model);

    for i in 0..model.decision_years() {
        let ages = space.ages(i);
        let unique: HashSet<usize> = ages.iter().copied().collect();
        assert_eq!(unique.len(), ages.len(), "duplicate age in year {}", i + 1);
        assert!(ages.windows(2).all(|w| w[0] < w[1]), "year {} unsorted", i + 1);
    }
}

#[test]
fn given_reference_sample_when_building_then_successors_follow_actions() {
    let model = samples::reference();

    let space = StateSpaceBuilder::new().build(&model);

    let root = space.root().and_then(|idx| space.get_node(idx)).unwrap();
    assert_eq!(root.machine_age, model.initial_age());
    assert_eq!(root.decision_year, INITIAL_DECISION_YEAR);

    for i in 0..model.decision_years() {
        for node in space.year(i) {
            let replace = node
                .replace_successor
                .and_then(|idx| space.get_node(idx))
                .unwrap();
            assert_eq!(replace.machine_age, 1);
            assert_eq!(replace.decision_year, node.decision_year + 1);

            match node.keep_successor.and_then(|idx| space.get_node(idx)) {
                Some(keep) => {
                    assert_eq!(keep.machine_age, node.machine_age + 1);
                    assert_eq!(keep.decision_year, node.decision_year + 1);
                }
                None => assert_eq!(node.machine_age, model.max_age()),
            }
        }
    }
}

#[test]
fn given_shared_state_when_building_then_both_parents_link_same_node() {
    let model = samples::reference();

    let space = StateSpaceBuilder::new().build(&model);

    // year 3 age 1 is reached by replacing from both year 2 states
    let shared = space.find(1, 3).unwrap();
    let parents: Vec<_> = space.year(1).map(|n| n.replace_successor).collect();
    assert_eq!(parents, vec![Some(shared), Some(shared)]);
}

#[test]
fn given_reference_sample_when_building_then_visits_every_path() {
    let model = samples::reference();
    let mut builder = StateSpaceBuilder::new();

    builder.build(&model);

    // 1 + 2 + 4 + 8 + 16 path visits, minus the keep branches cut at max age
    assert!(builder.visits() > model.decision_years());
    assert!(builder.visits() <= 31);
}
