//! Solve a model end to end and collect everything a caller may display.

use serde::Serialize;
use tracing::{info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{reconstruct, ChainTree, DecisionPath, Model, Solver, Stage, StateSpace};

/// Summary of the solved model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub decision_years: usize,
    pub initial_age: usize,
    pub max_age: usize,
    pub price: i64,
}

impl From<&Model> for ModelSummary {
    fn from(model: &Model) -> Self {
        Self {
            decision_years: model.decision_years(),
            initial_age: model.initial_age(),
            max_age: model.max_age(),
            price: model.price(),
        }
    }
}

/// Reachable machine ages of one decision year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearStates {
    pub decision_year: usize,
    pub ages: Vec<usize>,
}

/// Reachable ages of every decision year, first year first.
pub fn year_states(space: &StateSpace) -> Vec<YearStates> {
    (0..space.decision_years())
        .map(|i| YearStates {
            decision_year: i + 1,
            ages: space.ages(i),
        })
        .collect()
}

/// Complete result of one solve.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub model: ModelSummary,
    pub states: Vec<YearStates>,
    pub stages: Vec<Stage>,
    /// Optimal value of the initial state, None for an empty horizon
    pub optimal_value: Option<i64>,
    pub chains: Vec<DecisionPath>,
    #[serde(skip)]
    pub chain_tree: ChainTree,
}

impl SolveReport {
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Serialize {
            what: "report",
            message: e.to_string(),
        })
    }
}

/// Run the solver and the chain reconstruction for `model`.
#[instrument(level = "debug", skip_all)]
pub fn solve_model(model: &Model) -> ApplicationResult<SolveReport> {
    let mut solver = Solver::new();
    solver.solve(model)?;

    let space = solver.state_space();
    let states = year_states(space);

    let stages = solver.stages().to_vec();
    let optimal_value = stages
        .first()
        .and_then(|stage| stage.row(model.initial_age()))
        .map(|row| row.optimal_value);
    let chain_tree = reconstruct(&stages, model.initial_age())?;
    let chains = chain_tree.paths();

    info!(
        years = model.decision_years(),
        states = space.len(),
        chains = chains.len(),
        "solved model"
    );

    Ok(SolveReport {
        model: ModelSummary::from(model),
        states,
        stages,
        optimal_value,
        chains,
        chain_tree,
    })
}
