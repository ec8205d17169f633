//! Domain layer: model, decision tree and backward induction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod chain;
pub mod error;
pub mod model;
pub mod samples;
pub mod solver;
pub mod stage;

pub use arena::{NodeId, StateNode, StateSpace};
pub use builder::StateSpaceBuilder;
pub use chain::{reconstruct, Action, ChainTree, DecisionPath, SELL_MARKER};
pub use error::{DomainError, DomainResult};
pub use model::{DataRow, Model, INITIAL_DECISION_YEAR};
pub use solver::Solver;
pub use stage::{Decision, Stage, StageRow};
