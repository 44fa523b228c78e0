//! Conditional delete applied by the platform before loading a table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::AppError;

const INCOMPLETE: &str = "Delete where specification must contain keys 'column' and 'values'";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteOperator {
    #[default]
    Eq,
    Neq,
}

impl DeleteOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOperator::Eq => "eq",
            DeleteOperator::Neq => "neq",
        }
    }
}

impl fmt::Display for DeleteOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeleteOperator {
    type Err = AppError;

    /// An empty operator means the default, `eq`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "eq" => Ok(DeleteOperator::Eq),
            "neq" => Ok(DeleteOperator::Neq),
            _ => Err(AppError::validation("Delete operator must be 'eq' or 'neq'")),
        }
    }
}

/// Delete specification as supplied by the caller.
///
/// Fields stay optional until [`DeleteWhere::validate`] so an incomplete
/// specification is reported instead of being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteWhere {
    #[serde(default)]
    pub column: Option<String>,
    /// Values matched against `column`, passed through to the manifest as given.
    #[serde(default)]
    pub values: Option<Vec<Value>>,
    #[serde(default)]
    pub operator: Option<String>,
}

/// A validated delete specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDeleteWhere {
    pub column: String,
    pub values: Vec<Value>,
    pub operator: DeleteOperator,
}

impl DeleteWhere {
    pub fn new<C, I, V>(column: C, values: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            column: Some(column.into()),
            values: Some(values.into_iter().map(Into::into).collect()),
            operator: None,
        }
    }

    pub fn with_operator<S: Into<String>>(mut self, operator: S) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// True when nothing was specified; such a specification is ignored.
    pub fn is_empty(&self) -> bool {
        self.column.is_none() && self.values.is_none() && self.operator.is_none()
    }

    /// Read a specification from loosely typed JSON, checking value types.
    pub fn from_json(value: &Value) -> Result<Self, AppError> {
        let Some(spec) = value.as_object() else {
            return Err(AppError::validation("Delete where specification must be a dict"));
        };
        if !spec.contains_key("column") || !spec.contains_key("values") {
            return Err(AppError::validation(INCOMPLETE));
        }

        let column = match &spec["column"] {
            Value::String(column) => column.clone(),
            _ => return Err(AppError::validation("Delete column must be a string")),
        };
        let values = match &spec["values"] {
            Value::Array(values) => values.clone(),
            _ => return Err(AppError::validation("Delete values must be a list")),
        };
        let operator = match spec.get("operator") {
            None | Some(Value::Null) => None,
            Some(Value::String(operator)) => Some(operator.clone()),
            Some(_) => return Err(AppError::validation("Delete operator must be 'eq' or 'neq'")),
        };

        Ok(Self { column: Some(column), values: Some(values), operator })
    }

    pub fn validate(&self) -> Result<ResolvedDeleteWhere, AppError> {
        let (Some(column), Some(values)) = (&self.column, &self.values) else {
            return Err(AppError::validation(INCOMPLETE));
        };
        let operator = match self.operator.as_deref() {
            Some(operator) => operator.parse()?,
            None => DeleteOperator::default(),
        };
        Ok(ResolvedDeleteWhere { column: column.clone(), values: values.clone(), operator })
    }
}
