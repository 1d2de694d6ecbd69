use std::path::PathBuf;

use super::Plotter;
use crate::Result;
use crate::core::{Style, Theme};
use crate::figure::figure;
use crate::frame::Table;
use crate::output::THEMED_SCATTER;
use crate::render::points_2d;

/// Columns both scatter renderers need.
pub(super) const XY: [&str; 2] = ["x", "y"];

impl Plotter {
    /// Scatter of column `y` against column `x` on a white background with a
    /// light grid.
    ///
    /// Fails with `MissingColumns` before touching the filesystem when either
    /// column is absent.
    pub fn themed_scatter(&self, table: &Table) -> Result<PathBuf> {
        table.require_columns(&XY)?;
        let points = points_2d(table.numeric("x")?, table.numeric("y")?)?;

        let style = Style::default()
            .color(self.config.themed_accent_color()?)
            .size(3.0)
            .opacity(0.9);
        let plot = figure()
            .graph_2d(|p| {
                p.scatter(points, style)
                    .theme(Theme::WhiteGrid { grid_alpha: 0.3 })
                    .title("Scatter Plot of x vs y")
                    .x_label("x")
                    .y_label("y")
            })
            .build();

        self.render(&plot, THEMED_SCATTER)
    }
}
