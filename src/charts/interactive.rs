use std::path::PathBuf;

use super::Plotter;
use super::scatter::XY;
use crate::Result;
use crate::frame::Table;
use crate::html;
use crate::output::INTERACTIVE_SCATTER;

const TITLE: &str = "Interactive Scatter Plot";

impl Plotter {
    /// Standalone HTML scatter of `y` against `x` with zoom, pan and hover.
    ///
    /// Same validation as [`Plotter::themed_scatter`]; text columns are allowed.
    pub fn interactive_scatter(&self, table: &Table) -> Result<PathBuf> {
        table.require_columns(&XY)?;
        let x = table.require_column("x")?;
        let y = table.require_column("y")?;

        let figure = html::scatter_figure(x, y, TITLE, "x", "y");
        self.out
            .write_text(INTERACTIVE_SCATTER, &html::document(TITLE, &figure))
    }
}
