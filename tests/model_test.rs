//! Model validation at the crate boundary.

use rstest::rstest;

use mrsolve::cli::CliError;
use mrsolve::domain::{DataRow, DomainError, Model};
use mrsolve::exitcode;

fn table(n: usize) -> Vec<DataRow> {
    (0..n)
        .map(|age| DataRow::new(1_000 - age as i64 * 10, 100, 500 - age as i64 * 50))
        .collect()
}

#[test]
fn given_initial_age_above_max_age_when_creating_then_validation_error() {
    let err = Model::new(4, 10, 5, 100_000, table(6)).unwrap_err();

    assert!(matches!(
        err,
        DomainError::InitialAgeExceedsMaxAge {
            initial_age: 10,
            max_age: 5
        }
    ));
    assert!(err.is_validation());
}

#[rstest]
#[case(-4, 3, 6, 100)]
#[case(4, -3, 6, 100)]
#[case(4, 3, -6, 100)]
#[case(4, 3, 6, -100)]
fn given_negative_scalar_when_creating_then_data_error_exit_code(
    #[case] years: i64,
    #[case] initial: i64,
    #[case] max: i64,
    #[case] price: i64,
) {
    let err = Model::new(years, initial, max, price, table(7)).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(CliError::from(err).exit_code(), exitcode::DATAERR);
}

#[test]
fn given_boundary_initial_age_when_creating_then_accepted() {
    let model = Model::new(3, 5, 5, 100, table(6)).unwrap();

    assert_eq!(model.initial_age(), model.max_age());
}
