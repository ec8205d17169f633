//! Optimal decision chains: replays solved stages from the initial state.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::stage::{Decision, Stage};

/// Label printed after the last decision of every chain.
pub const SELL_MARKER: &str = "SELL";

/// Decision actually taken along a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Keep,
    Replace,
}

impl Action {
    /// Machine age after taking this action with a machine of `age` years.
    pub fn next_age(&self, age: usize) -> usize {
        match self {
            Action::Keep => age + 1,
            Action::Replace => 1,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Keep => f.write_str(Decision::Keep.label()),
            Action::Replace => f.write_str(Decision::Replace.label()),
        }
    }
}

/// Tree of optimal chains; branches wherever a state is indifferent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainTree {
    /// Actions up to the horizon, no further ties
    Leaf(Vec<Action>),
    /// Actions up to an indifferent state, then both continuations
    Fork {
        prefix: Vec<Action>,
        keep: Box<ChainTree>,
        replace: Box<ChainTree>,
    },
}

impl ChainTree {
    /// Every optimal path, keep branches before replace branches.
    pub fn paths(&self) -> Vec<DecisionPath> {
        match self {
            ChainTree::Leaf(actions) => vec![DecisionPath(actions.clone())],
            ChainTree::Fork {
                prefix,
                keep,
                replace,
            } => {
                let branch = |action: Action, tree: &ChainTree| {
                    tree.paths().into_iter().map(move |tail| {
                        let mut actions = prefix.clone();
                        actions.push(action);
                        actions.extend(tail.0);
                        DecisionPath(actions)
                    })
                };
                branch(Action::Keep, keep)
                    .chain(branch(Action::Replace, replace))
                    .collect()
            }
        }
    }

    /// Number of distinct optimal paths.
    pub fn count(&self) -> usize {
        match self {
            ChainTree::Leaf(_) => 1,
            ChainTree::Fork { keep, replace, .. } => keep.count() + replace.count(),
        }
    }
}

/// One complete optimal sequence of actions from the initial state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DecisionPath(pub Vec<Action>);

impl DecisionPath {
    pub fn actions(&self) -> &[Action] {
        &self.0
    }
}

impl fmt::Display for DecisionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(SELL_MARKER);
        }
        write!(f, "{} {}", self.0.iter().join(" "), SELL_MARKER)
    }
}

/// Walk the solved stages from (`stages[0]`, `initial_age`) to the horizon.
///
/// # Errors
/// [`DomainError::MissingStageRow`] if a visited age has no row; solved
/// stages of a consistent solver always contain every reachable age.
#[instrument(level = "debug", skip(stages), fields(years = stages.len()))]
pub fn reconstruct(stages: &[Stage], initial_age: usize) -> DomainResult<ChainTree> {
    let tree = walk(stages, 0, initial_age)?;
    debug!(chains = tree.count(), "reconstructed chains");
    Ok(tree)
}

fn walk(stages: &[Stage], start: usize, initial_age: usize) -> DomainResult<ChainTree> {
    let mut prefix = Vec::new();
    let mut age = initial_age;

    for (index, stage) in stages.iter().enumerate().skip(start) {
        let row = stage.row(age).ok_or(DomainError::MissingStageRow {
            decision_year: stage.decision_year,
            age,
        })?;
        let action = match row.decision {
            Decision::Keep => Action::Keep,
            Decision::Replace => Action::Replace,
            Decision::KeepOrReplace => {
                let keep = walk(stages, index + 1, Action::Keep.next_age(age))?;
                let replace = walk(stages, index + 1, Action::Replace.next_age(age))?;
                return Ok(ChainTree::Fork {
                    prefix,
                    keep: Box::new(keep),
                    replace: Box::new(replace),
                });
            }
        };
        prefix.push(action);
        age = action.next_age(age);
    }
    Ok(ChainTree::Leaf(prefix))
}
