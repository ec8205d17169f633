//! Optimal replace-vs-keep policies for aging equipment.
//!
//! The [`domain`] layer enumerates the reachable (machine age, decision year)
//! states of a [`domain::Model`], solves them by backward induction and
//! reconstructs every optimal decision chain:
//!
//! ```
//! use mrsolve::domain::{reconstruct, samples, Decision, Solver};
//!
//! let model = samples::reference();
//! let mut solver = Solver::new();
//! solver.solve(&model).unwrap();
//!
//! let first = solver.stages()[0].row(model.initial_age()).unwrap();
//! assert_eq!(first.decision, Decision::Replace);
//!
//! let chains = reconstruct(solver.stages(), model.initial_age()).unwrap();
//! assert_eq!(chains.paths().len(), 2);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
