//! TOML model files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::error_ext::IoResultExt;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{samples, DataRow, DomainResult, Model};

/// Model as written in a file; signed so negative input reaches validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModel {
    pub decision_years: i64,
    pub initial_age: i64,
    pub max_age: i64,
    pub price: i64,
    #[serde(default)]
    pub data: Vec<DataRow>,
}

impl RawModel {
    pub fn validate(self) -> DomainResult<Model> {
        Model::new(
            self.decision_years,
            self.initial_age,
            self.max_age,
            self.price,
            self.data,
        )
    }
}

impl From<&Model> for RawModel {
    fn from(model: &Model) -> Self {
        Self {
            decision_years: model.decision_years() as i64,
            initial_age: model.initial_age() as i64,
            max_age: model.max_age() as i64,
            price: model.price(),
            data: model.data().to_vec(),
        }
    }
}

/// Parse and validate model TOML; `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> ApplicationResult<Model> {
    let raw: RawModel = toml::from_str(content).map_err(|e| ApplicationError::ModelFile {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    Ok(raw.validate()?)
}

/// Read, parse and validate a model file.
#[instrument(level = "debug")]
pub fn load(path: &Path) -> ApplicationResult<Model> {
    let content = std::fs::read_to_string(path).with_path_context("read model", path)?;
    let model = parse(&content, path)?;
    debug!(
        years = model.decision_years(),
        max_age = model.max_age(),
        "loaded model"
    );
    Ok(model)
}

/// Serialize a model to TOML.
pub fn to_toml(model: &Model) -> ApplicationResult<String> {
    toml::to_string_pretty(&RawModel::from(model)).map_err(|e| ApplicationError::Serialize {
        what: "model",
        message: e.to_string(),
    })
}

/// Commented model template, prefilled with the reference sample.
pub fn template() -> ApplicationResult<String> {
    let body = to_toml(&samples::reference())?;
    Ok(format!(
        r#"# mrsolve model
#
# decision_years: number of yearly keep/replace decisions
# initial_age:    age of the machine at the first decision
# max_age:        oldest permissible age, machines this old must be replaced
# price:          cost of a new machine
#
# [[data]] rows are indexed by machine age, starting at 0 (a new machine);
# provide one row per age 0..=max_age. selling_revenue of age 0 is unused.

{body}"#
    ))
}
