//! Backward induction over the decision years.

use tracing::{debug, instrument, trace};

use crate::domain::arena::StateSpace;
use crate::domain::builder::StateSpaceBuilder;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::model::Model;
use crate::domain::stage::{Stage, StageRow};

/// Solves a [`Model`] and keeps the state space and stage tables of the
/// last run.
///
/// Calling [`solve`](Self::solve) again discards the previous results.
#[derive(Debug, Default)]
pub struct Solver {
    state_space: StateSpace,
    stages: Vec<Stage>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reachable states of the last solved model.
    pub fn state_space(&self) -> &StateSpace {
        &self.state_space
    }

    /// Stage tables of the last solved model, index 0 = decision year 1.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Build the decision tree and fill the stage tables from the last
    /// decision year back to the first.
    ///
    /// # Errors
    /// [`DomainError::MissingStageRow`] if a successor age has no row in the
    /// following stage. This only happens if the state space and the solver
    /// disagree, never because of the model itself.
    #[instrument(level = "debug", skip_all, fields(years = model.decision_years()))]
    pub fn solve(&mut self, model: &Model) -> DomainResult<()> {
        let years = model.decision_years();
        self.state_space = StateSpaceBuilder::new().build(model);
        self.stages = (1..=years).map(Stage::new).collect();

        for i in (0..years).rev() {
            let rows = {
                let next = self.stages.get(i + 1);
                solve_stage(model, &self.state_space, i, next)?
            };
            debug!(decision_year = i + 1, rows = rows.len(), "solved stage");
            self.stages[i].rows = rows;
        }
        Ok(())
    }
}

/// Rows of the stage with 0-based index `index`; `next` is None for the last
/// decision year.
fn solve_stage(
    model: &Model,
    space: &StateSpace,
    index: usize,
    next: Option<&Stage>,
) -> DomainResult<Vec<StageRow>> {
    let new_machine = model.row(0);

    let next_optimum = |age: usize| -> DomainResult<Option<i64>> {
        match next {
            None => Ok(None),
            Some(stage) => stage
                .row(age)
                .map(|row| Some(row.optimal_value))
                .ok_or(DomainError::MissingStageRow {
                    decision_year: stage.decision_year,
                    age,
                }),
        }
    };

    let mut rows = Vec::new();
    for node in space.year(index) {
        let t = node.machine_age;
        let current = model.row(t);
        let overflow = || DomainError::ValueOverflow {
            decision_year: node.decision_year,
            age: t,
        };

        let keep_value = if t == model.max_age() {
            None
        } else {
            let future = match next_optimum(t + 1)? {
                Some(future) => future,
                None => model.row(t + 1).selling_revenue,
            };
            let value = current
                .income
                .checked_sub(current.operation_cost)
                .and_then(|running| running.checked_add(future))
                .ok_or_else(overflow)?;
            Some(value)
        };

        let future = match next_optimum(1)? {
            Some(future) => future,
            None => model.row(1).selling_revenue,
        };
        let replace_value = new_machine
            .income
            .checked_add(current.selling_revenue)
            .and_then(|v| v.checked_sub(new_machine.operation_cost))
            .and_then(|v| v.checked_sub(model.price()))
            .and_then(|swap| swap.checked_add(future))
            .ok_or_else(overflow)?;

        let row = StageRow::new(t, keep_value, replace_value);
        trace!(?row, "stage row");
        rows.push(row);
    }
    Ok(rows)
}
