//! Plain-text tables for stages and state collections.

use itertools::Itertools;

use crate::application::report::YearStates;
use crate::domain::{Stage, StageRow};

const NOT_APPLICABLE: &str = "-";

/// Header line of a stage table.
pub fn stage_header() -> String {
    format!(
        "{:>4} {:>14} {:>14} {:>14}  {}",
        "t", "K", "R", "max", "decision"
    )
}

/// One stage row; the decision label is always the last token.
pub fn stage_row(row: &StageRow) -> String {
    let keep = row
        .keep_value
        .map_or_else(|| NOT_APPLICABLE.to_string(), |k| k.to_string());
    format!(
        "{:>4} {:>14} {:>14} {:>14}  {}",
        row.age, keep, row.replace_value, row.optimal_value, row.decision
    )
}

/// Title of a stage table.
pub fn stage_title(stage: &Stage) -> String {
    format!("Decision year {}", stage.decision_year)
}

/// `year 2: t = 1, 4`
pub fn year_states(states: &YearStates) -> String {
    format!(
        "year {}: t = {}",
        states.decision_year,
        states.ages.iter().join(", ")
    )
}
