//! On-disk workbook format
//!
//! A workbook is the budget model plus a schema version:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "months": ["January 2024", "February 2024"],
//!   "sections": [
//!     { "parent_category_name": "Main Income", "kind": "income", "groups": [...] }
//!   ]
//! }
//! ```
//!
//! Amounts are stored as integer cents.

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetModel;

/// Current workbook schema version
pub const WORKBOOK_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    WORKBOOK_SCHEMA_VERSION
}

/// Serializable wrapper around the budget model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(flatten)]
    pub model: BudgetModel,
}

impl Workbook {
    pub fn from_model(model: &BudgetModel) -> Self {
        Self {
            schema_version: WORKBOOK_SCHEMA_VERSION,
            model: model.clone(),
        }
    }

    /// Unwrap the model, rejecting unknown versions and misaligned columns
    pub fn into_model(self) -> BudgetResult<BudgetModel> {
        if self.schema_version > WORKBOOK_SCHEMA_VERSION {
            return Err(BudgetError::Storage(format!(
                "Workbook schema version {} is newer than supported version {}",
                self.schema_version, WORKBOOK_SCHEMA_VERSION
            )));
        }
        self.model.validate()?;
        Ok(self.model)
    }
}
