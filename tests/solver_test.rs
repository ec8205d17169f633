//! End-to-end solver tests on the built-in samples.

use rstest::rstest;

use mrsolve::domain::{samples, Decision, Model, Solver};
use mrsolve::util::testing;

fn solve(model: &Model) -> Solver {
    testing::init_test_setup();
    let mut solver = Solver::new();
    solver.solve(model).unwrap();
    solver
}

#[rstest]
#[case(1, 3, Some(51_200), 55_300, Decision::Replace)]
#[case(2, 1, Some(85_500), 85_500, Decision::KeepOrReplace)]
#[case(2, 4, Some(30_800), 35_500, Decision::Replace)]
#[case(3, 1, Some(85_700), 79_600, Decision::Keep)]
#[case(3, 2, Some(67_100), 59_600, Decision::Keep)]
#[case(3, 5, Some(17_000), 9_600, Decision::Keep)]
#[case(4, 1, Some(78_400), 79_800, Decision::Replace)]
#[case(4, 2, Some(67_300), 59_800, Decision::Keep)]
#[case(4, 3, Some(45_700), 49_800, Decision::Replace)]
#[case(4, 6, None, 4_800, Decision::Replace)]
fn given_reference_sample_when_solving_then_stage_rows_match(
    #[case] decision_year: usize,
    #[case] age: usize,
    #[case] keep: Option<i64>,
    #[case] replace: i64,
    #[case] decision: Decision,
) {
    // Arrange
    let model = samples::reference();

    // Act
    let solver = solve(&model);

    // Assert
    let stage = &solver.stages()[decision_year - 1];
    assert_eq!(stage.decision_year, decision_year);
    let row = stage.row(age).unwrap();
    assert_eq!(row.keep_value, keep);
    assert_eq!(row.replace_value, replace);
    assert_eq!(row.optimal_value, keep.unwrap_or(replace).max(replace));
    assert_eq!(row.decision, decision);
}

#[rstest]
#[case::reference(samples::reference())]
#[case::aarf(samples::aarf())]
fn given_sample_when_solving_then_one_nonempty_stage_per_year(#[case] model: Model) {
    let solver = solve(&model);

    assert_eq!(solver.stages().len(), model.decision_years());
    for stage in solver.stages() {
        assert!(!stage.rows.is_empty(), "year {} empty", stage.decision_year);
    }
    assert_eq!(solver.stages()[0].rows.len(), 1);
}

#[rstest]
#[case::reference(samples::reference())]
#[case::aarf(samples::aarf())]
fn given_sample_when_solving_then_max_age_rows_replace(#[case] model: Model) {
    let solver = solve(&model);

    for row in solver.stages().iter().flat_map(|s| s.rows.iter()) {
        if row.age == model.max_age() {
            assert_eq!(row.keep_value, None);
            assert_eq!(row.decision, Decision::Replace);
        } else {
            assert!(row.keep_value.is_some());
        }
    }
}

#[rstest]
#[case::reference(samples::reference())]
#[case::aarf(samples::aarf())]
fn given_sample_when_solving_then_tie_iff_values_equal(#[case] model: Model) {
    let solver = solve(&model);

    for row in solver.stages().iter().flat_map(|s| s.rows.iter()) {
        let tie = row.keep_value == Some(row.replace_value);
        assert_eq!(row.decision == Decision::KeepOrReplace, tie, "{row:?}");
    }
}

#[test]
fn given_same_model_when_solving_twice_then_results_identical() {
    let model = samples::aarf();

    let first = solve(&model);
    let second = solve(&model);

    assert_eq!(first.stages(), second.stages());
    for i in 0..model.decision_years() {
        assert_eq!(first.state_space().ages(i), second.state_space().ages(i));
    }
}

#[test]
fn given_solver_reused_when_solving_other_model_then_previous_results_discarded() {
    let mut solver = solve(&samples::aarf());

    solver.solve(&samples::reference()).unwrap();

    assert_eq!(solver.stages().len(), 4);
    assert_eq!(solver.state_space().decision_years(), 4);
}

#[test]
fn given_zero_decision_years_when_solving_then_no_stages() {
    let model = Model::new(0, 2, 5, 100, Vec::new()).unwrap();

    let solver = solve(&model);

    assert!(solver.stages().is_empty());
    assert!(solver.state_space().root().is_none());
}
