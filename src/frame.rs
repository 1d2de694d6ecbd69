//! Column-major table handed to the chart operations.
//!
//! A [`Table`] is an ordered set of named, equal-length columns. Numeric
//! columns mark missing values with `NaN`; text columns use `None`.
//!
//! ```
//! use tabviz::frame::{Column, Table};
//!
//! let table = Table::new()
//!     .with_column("x", vec![1.0, 2.0, 3.0])
//!     .and_then(|t| t.with_column("label", vec!["a", "b", "a"]))
//!     .unwrap();
//! assert_eq!(table.row_count(), 3);
//! assert!(table.column("x").is_some_and(Column::is_numeric));
//! ```

use std::fmt;

use error_stack::Report;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, TabvizError};

/// A single column of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<Option<String>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }

    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Column::Numeric(v) => Some(v),
            Column::Text(_) => None,
        }
    }

    /// Values as JSON, missing entries as `null`.
    pub fn to_json_values(&self) -> Vec<Value> {
        match self {
            Column::Numeric(v) => v
                .iter()
                .map(|&x| serde_json::Number::from_f64(x).map_or(Value::Null, Value::Number))
                .collect(),
            Column::Text(v) => v
                .iter()
                .map(|s| s.as_ref().map_or(Value::Null, |s| Value::String(s.clone())))
                .collect(),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Numeric(values)
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Column::Numeric(values.into_iter().map(|v| v as f64).collect())
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Text(values.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<Option<String>>> for Column {
    fn from(values: Vec<Option<String>>) -> Self {
        Column::Text(values)
    }
}

/// A single cell value, used for the most-frequent and top entries of a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Ordered, named, equal-length columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, column)` pairs.
    pub fn from_columns<N, C, I>(columns: I) -> Result<Self>
    where
        N: Into<String>,
        C: Into<Column>,
        I: IntoIterator<Item = (N, C)>,
    {
        columns
            .into_iter()
            .try_fold(Self::new(), |table, (name, col)| table.with_column(name, col))
    }

    /// Builder-style [`Table::add_column`].
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<Self> {
        self.add_column(name, column)?;
        Ok(self)
    }

    /// Append a column. Fails on a duplicate name or a length that differs
    /// from the columns already present.
    pub fn add_column(&mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.column(&name).is_some() {
            return Err(Report::new(TabvizError::DuplicateColumn { column: name }));
        }
        if let Some((_, first)) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Report::new(TabvizError::LengthMismatch {
                    expected: first.len(),
                    actual: column.len(),
                })
                .attach(format!("column '{name}'")));
            }
        }

        self.columns.push((name, column));
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when there are no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.columns.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find_map(|(n, c)| (n == name).then_some(c))
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Numeric columns in table order.
    pub fn numeric_columns(&self) -> Vec<(&str, &[f64])> {
        self.columns
            .iter()
            .filter_map(|(n, c)| c.as_numeric().map(|v| (n.as_str(), v)))
            .collect()
    }

    /// Fail with `MissingColumns` unless every name in `names` is present.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        let missing: Vec<String> = names
            .iter()
            .filter(|n| self.column(n).is_none())
            .map(|n| n.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Report::new(TabvizError::MissingColumns { missing }));
        }
        Ok(())
    }

    /// Look up a column that must be present.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| {
            Report::new(TabvizError::MissingColumns {
                missing: vec![name.to_string()],
            })
        })
    }

    /// Look up a column that must hold numbers.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        self.require_column(name)?.as_numeric().ok_or_else(|| {
            Report::new(TabvizError::NonNumericColumn {
                column: name.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy() -> Table {
        Table::from_columns([("x", vec![1.0, 2.0, 3.0]), ("y", vec![4.0, 5.0, 6.0])]).unwrap()
    }

    #[test]
    fn builds_and_counts() {
        let t = xy();
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.column_count(), 2);
        let names: Vec<&str> = t.columns().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert!(!t.is_empty());
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = xy().with_column("z", vec![1.0]).unwrap_err();
        assert_eq!(
            err.current_context(),
            &TabvizError::LengthMismatch {
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = xy().with_column("x", vec![0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err.current_context(),
            TabvizError::DuplicateColumn { column } if column == "x"
        ));
    }

    #[test]
    fn require_columns_lists_missing() {
        let t = Table::from_columns([("x", vec![1.0])]).unwrap();
        let err = t.require_columns(&["x", "y"]).unwrap_err();
        assert_eq!(
            err.current_context(),
            &TabvizError::MissingColumns {
                missing: vec!["y".to_string()]
            }
        );
        assert!(xy().require_columns(&["x", "y"]).is_ok());
    }

    #[test]
    fn numeric_lookup_distinguishes_text() {
        let t = xy().with_column("label", vec!["a", "b", "c"]).unwrap();
        assert_eq!(t.numeric("x").unwrap(), &[1.0, 2.0, 3.0]);
        assert!(matches!(
            t.numeric("label").unwrap_err().current_context(),
            TabvizError::NonNumericColumn { .. }
        ));
        assert_eq!(t.numeric_columns().len(), 2);
    }

    #[test]
    fn empty_tables() {
        assert!(Table::new().is_empty());
        let no_rows = Table::from_columns([("x", Vec::<f64>::new())]).unwrap();
        assert!(no_rows.is_empty());
    }

    #[test]
    fn json_values_null_missing() {
        let c = Column::Numeric(vec![1.5, f64::NAN]);
        assert_eq!(c.to_json_values(), vec![serde_json::json!(1.5), Value::Null]);
        let t = Column::Text(vec![Some("a".into()), None]);
        assert_eq!(t.to_json_values(), vec![serde_json::json!("a"), Value::Null]);
    }
}
