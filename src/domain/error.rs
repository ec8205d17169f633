//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors cover invalid models and internal solver inconsistencies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} is a non-negative integer: {value}")]
    NegativeValue { field: &'static str, value: i64 },

    #[error("initial age {initial_age} exceeds max age {max_age}")]
    InitialAgeExceedsMaxAge { initial_age: i64, max_age: i64 },

    #[error("max age must be at least 1 when planning {decision_years} decision years")]
    MaxAgeTooSmall { decision_years: usize },

    #[error("data table covers {actual} ages, model needs {required} (ages 0..=max_age)")]
    IncompleteData { required: usize, actual: usize },

    #[error("values overflow at age {age} in decision year {decision_year}")]
    ValueOverflow { decision_year: usize, age: usize },

    /// Solved stage has no row for an age the state space says is reachable.
    #[error("internal error: no stage row for age {age} in decision year {decision_year}")]
    MissingStageRow { decision_year: usize, age: usize },
}

impl DomainError {
    /// True for errors caused by the caller's model rather than a solver bug.
    pub fn is_validation(&self) -> bool {
        !matches!(self, DomainError::MissingStageRow { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
