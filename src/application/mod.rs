//! Application layer: model files and solve reports
//!
//! This layer orchestrates domain logic and owns file I/O.

pub mod error;
pub mod error_ext;
pub mod model_file;
pub mod report;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use model_file::RawModel;
pub use report::{solve_model, SolveReport};
