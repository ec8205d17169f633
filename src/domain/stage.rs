//! Solved stage tables of the backward induction.

use std::fmt;

use serde::Serialize;

/// Optimal decision for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Decision {
    Keep,
    Replace,
    /// Keeping and replacing yield the same value
    KeepOrReplace,
}

impl Decision {
    /// Decision for a state given its keep and replace values.
    ///
    /// A missing keep value means the machine is at max age and must go.
    pub fn from_values(keep_value: Option<i64>, replace_value: i64) -> Self {
        match keep_value {
            None => Decision::Replace,
            Some(k) if k > replace_value => Decision::Keep,
            Some(k) if k < replace_value => Decision::Replace,
            Some(_) => Decision::KeepOrReplace,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Decision::Keep => "K",
            Decision::Replace => "R",
            Decision::KeepOrReplace => "K or R",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reachable machine age of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageRow {
    /// Machine age `t`
    pub age: usize,
    /// Value of keeping (`k`), None when the machine is at max age
    pub keep_value: Option<i64>,
    /// Value of replacing (`r`)
    pub replace_value: i64,
    /// Best of the two
    pub optimal_value: i64,
    pub decision: Decision,
}

impl StageRow {
    pub fn new(age: usize, keep_value: Option<i64>, replace_value: i64) -> Self {
        let optimal_value = keep_value.map_or(replace_value, |k| k.max(replace_value));
        Self {
            age,
            keep_value,
            replace_value,
            optimal_value,
            decision: Decision::from_values(keep_value, replace_value),
        }
    }
}

/// Backward-induction table for one decision year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stage {
    /// 1-based decision year
    pub decision_year: usize,
    /// One row per reachable age, ascending
    pub rows: Vec<StageRow>,
}

impl Stage {
    pub fn new(decision_year: usize) -> Self {
        Self {
            decision_year,
            rows: Vec::new(),
        }
    }

    /// Row for exactly this machine age.
    pub fn row(&self, age: usize) -> Option<&StageRow> {
        self.rows.iter().find(|row| row.age == age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 10, Decision::Replace)]
    #[case(Some(-1), -1, Decision::KeepOrReplace)]
    #[case(Some(11), 10, Decision::Keep)]
    #[case(Some(9), 10, Decision::Replace)]
    #[case(Some(10), 10, Decision::KeepOrReplace)]
    fn given_values_when_deciding_then_picks_larger(
        #[case] keep: Option<i64>,
        #[case] replace: i64,
        #[case] expected: Decision,
    ) {
        assert_eq!(Decision::from_values(keep, replace), expected);
    }

    #[test]
    fn given_no_keep_value_when_creating_row_then_optimum_is_replace_value() {
        let row = StageRow::new(6, None, 4800);
        assert_eq!(row.optimal_value, 4800);
        assert_eq!(row.decision, Decision::Replace);
    }

    #[test]
    fn given_rows_when_looking_up_age_then_matches_exactly() {
        let stage = Stage {
            decision_year: 2,
            rows: vec![StageRow::new(1, Some(5), 3), StageRow::new(4, Some(1), 3)],
        };

        assert_eq!(stage.row(4).map(|r| r.optimal_value), Some(3));
        assert!(stage.row(2).is_none());
    }
}
