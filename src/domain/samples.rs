//! Built-in sample models.

use crate::domain::model::{DataRow, Model};

/// Names accepted by [`by_name`].
pub const SAMPLE_NAMES: [&str; 2] = ["reference", "aarf"];

pub fn names() -> &'static [&'static str] {
    &SAMPLE_NAMES
}

/// Look up a sample by name (case-insensitive).
pub fn by_name(name: &str) -> Option<Model> {
    match name.to_ascii_lowercase().as_str() {
        "reference" => Some(reference()),
        "aarf" => Some(aarf()),
        _ => None,
    }
}

/// Textbook problem: 4 decision years, a 3 year old machine, max age 6.
pub fn reference() -> Model {
    build(
        4,
        3,
        6,
        100_000,
        &[
            (20_000, 200, -1),
            (19_000, 600, 80_000),
            (18_500, 1_200, 60_000),
            (17_200, 1_500, 50_000),
            (15_500, 1_700, 30_000),
            (14_000, 1_800, 10_000),
            (12_200, 2_200, 5_000),
        ],
    )
}

/// Ten year plan for a new machine (initial age 0, max age 10).
pub fn aarf() -> Model {
    build(
        10,
        0,
        10,
        8_608_000,
        &[
            (2_330_000, 240_000, -1),
            (2_320_000, 253_000, 8_177_600),
            (2_210_000, 257_000, 7_768_720),
            (2_090_000, 272_000, 7_380_284),
            (1_895_000, 274_000, 7_011_269),
            (1_770_000, 301_000, 6_310_142),
            (1_720_000, 311_000, 5_679_127),
            (1_655_000, 361_000, 5_111_215),
            (1_590_000, 396_000, 4_600_093),
            (1_345_000, 403_000, 3_910_079),
            (1_029_000, 415_000, 3_323_567),
        ],
    )
}

fn build(years: i64, initial: i64, max: i64, price: i64, rows: &[(i64, i64, i64)]) -> Model {
    let data = rows
        .iter()
        .map(|&(income, cost, revenue)| DataRow::new(income, cost, revenue))
        .collect();
    match Model::new(years, initial, max, price, data) {
        Ok(model) => model,
        Err(e) => unreachable!("built-in sample is invalid: {e}"),
    }
}
