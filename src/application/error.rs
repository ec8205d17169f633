//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{samples, DomainError};

/// Application errors wrap domain errors and add file and config context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid model file {path}: {message}")]
    ModelFile { path: PathBuf, message: String },

    #[error("unknown sample '{0}' (available: {available})", available = samples::names().join(", "))]
    UnknownSample(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("cannot serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
