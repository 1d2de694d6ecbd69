//! Parsing `name=v1,v2,...` column arguments into a table.

use tabviz::{Column, Table};
use thiserror::Error;

use crate::report;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("column argument '{0}' is not of the form name=v1,v2,...")]
    Malformed(String),

    #[error("column name is empty in '{0}'")]
    EmptyName(String),
}

/// Split one argument into its name and column.
///
/// The column is numeric when every non-empty entry parses as a number;
/// empty entries become missing values either way.
pub fn parse_column(arg: &str) -> Result<(String, Column), InputError> {
    let (name, values) = arg
        .split_once('=')
        .ok_or_else(|| InputError::Malformed(arg.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName(arg.to_string()));
    }

    let cells: Vec<&str> = if values.is_empty() {
        Vec::new()
    } else {
        values.split(',').map(str::trim).collect()
    };

    let numbers: Option<Vec<f64>> = cells
        .iter()
        .map(|c| if c.is_empty() { Some(f64::NAN) } else { c.parse().ok() })
        .collect();

    let column = match numbers {
        Some(v) => Column::Numeric(v),
        None => Column::Text(
            cells
                .iter()
                .map(|c| (!c.is_empty()).then(|| c.to_string()))
                .collect(),
        ),
    };
    Ok((name.to_string(), column))
}

/// Parse every argument and assemble the table.
pub fn parse_table(args: &[String]) -> anyhow::Result<Table> {
    let mut table = Table::new();
    for arg in args {
        let (name, column) = parse_column(arg)?;
        table
            .add_column(name, column)
            .map_err(report)?;
    }
    Ok(table)
}
