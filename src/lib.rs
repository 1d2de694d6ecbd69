pub mod charts;
pub mod config;
pub mod core;
pub mod figure;
pub mod frame;
pub mod html;
pub mod output;
pub mod render;
pub mod stats;

use thiserror::Error;

/// Every failure a chart operation can report.
///
/// Validation failures (`MissingColumns`, `EmptyTable`) are raised before any
/// file is touched; the rest surface from the statistics and rendering layers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TabvizError {
    #[error("table is missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("table is empty")]
    EmptyTable,

    #[error("column '{column}' is not numeric")]
    NonNumericColumn { column: String },

    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },

    #[error("column '{column}' has no values to take a mode from")]
    NoMode { column: String },

    #[error("failed to render chart")]
    Render,

    #[error("failed to write artifact")]
    Io,

    #[error("invalid render configuration")]
    Config,
}

pub type Result<T> = std::result::Result<T, error_stack::Report<TabvizError>>;

pub use charts::{
    CategoryCounts, Exploration, Plotter, category_frequency, explore, interactive_scatter,
    line_1d, scatter_2d, scatter_3d, themed_scatter,
};
pub use frame::{Column, Scalar, Table};

pub mod prelude {
    pub use crate::charts::*;
    pub use crate::config::*;
    pub use crate::core::*;
    pub use crate::figure::*;
    pub use crate::frame::*;
    pub use crate::stats::{CorrelationMatrix, Summary};
    pub use crate::{Result, TabvizError};
}
