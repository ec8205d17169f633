//! Validated input for the replacement problem.

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Decision year of the initial state.
pub const INITIAL_DECISION_YEAR: usize = 1;

/// Yearly economics of a machine of one particular age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRow {
    /// Income earned during one year of operation
    pub income: i64,
    /// Operating cost for one year
    pub operation_cost: i64,
    /// Revenue from selling a machine of this age (unused at age 0)
    pub selling_revenue: i64,
}

impl DataRow {
    pub fn new(income: i64, operation_cost: i64, selling_revenue: i64) -> Self {
        Self {
            income,
            operation_cost,
            selling_revenue,
        }
    }
}

/// Replacement model: planning horizon, machine ages, price and the
/// per-age data table (indexed by age, `data[0]` is a new machine).
///
/// Instances only exist in validated form, see [`Model::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    decision_years: usize,
    initial_age: usize,
    max_age: usize,
    price: i64,
    data: Vec<DataRow>,
}

impl Model {
    /// Validate the raw numbers and build the model.
    ///
    /// # Errors
    /// * [`DomainError::NegativeValue`] for a negative horizon, age or price
    /// * [`DomainError::InitialAgeExceedsMaxAge`] if `initial_age > max_age`
    /// * [`DomainError::MaxAgeTooSmall`] if there is something to decide but
    ///   a replacement machine (age 1) would already exceed `max_age`
    /// * [`DomainError::IncompleteData`] if the table misses ages `0..=max_age`
    pub fn new(
        decision_years: i64,
        initial_age: i64,
        max_age: i64,
        price: i64,
        data: Vec<DataRow>,
    ) -> DomainResult<Self> {
        let decision_years = non_negative("decisionYears", decision_years)?;
        let initial = non_negative("initialAge", initial_age)?;
        let max = non_negative("maxAge", max_age)?;
        non_negative("price", price)?;

        if initial > max {
            return Err(DomainError::InitialAgeExceedsMaxAge {
                initial_age,
                max_age,
            });
        }

        if decision_years > 0 {
            if max == 0 {
                return Err(DomainError::MaxAgeTooSmall { decision_years });
            }
            let required = max + 1;
            if data.len() < required {
                return Err(DomainError::IncompleteData {
                    required,
                    actual: data.len(),
                });
            }
        }

        Ok(Self {
            decision_years,
            initial_age: initial,
            max_age: max,
            price,
            data,
        })
    }

    pub fn decision_years(&self) -> usize {
        self.decision_years
    }

    pub fn initial_age(&self) -> usize {
        self.initial_age
    }

    pub fn max_age(&self) -> usize {
        self.max_age
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn data(&self) -> &[DataRow] {
        &self.data
    }

    /// Data row for a machine of `age` years.
    ///
    /// Validation guarantees every age in `0..=max_age` is present.
    pub(crate) fn row(&self, age: usize) -> &DataRow {
        &self.data[age]
    }
}

fn non_negative(field: &'static str, value: i64) -> DomainResult<usize> {
    usize::try_from(value).map_err(|_| DomainError::NegativeValue { field, value })
}
