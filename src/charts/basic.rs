use std::path::PathBuf;

use glam::DVec2;

use super::Plotter;
use crate::Result;
use crate::core::Style;
use crate::figure::figure;
use crate::output::{LINE_1D, SCATTER_2D, SCATTER_3D};
use crate::render::{points_2d, points_3d};

impl Plotter {
    /// Connected line through `values` against their index.
    pub fn line_1d(&self, values: &[f64]) -> Result<PathBuf> {
        let xy: Vec<DVec2> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| DVec2::new(i as f64, v))
            .collect();
        let style = Style::default().color(self.config.accent_color()?).size(1.5);
        let plot = figure()
            .graph_2d(|p| {
                p.line(xy, style)
                    .title("1D Line Plot")
                    .x_label("Index")
                    .y_label("Value")
            })
            .build();
        self.render(&plot, LINE_1D)
    }

    /// Unconnected markers at `(x[i], y[i])`.
    pub fn scatter_2d(&self, x: &[f64], y: &[f64]) -> Result<PathBuf> {
        let points = points_2d(x, y)?;
        let style = Style::default().color(self.config.accent_color()?).size(3.0);
        let plot = figure()
            .graph_2d(|p| {
                p.scatter(points, style)
                    .title("2D Scatter Plot")
                    .x_label("x")
                    .y_label("y")
            })
            .build();
        self.render(&plot, SCATTER_2D)
    }

    /// Markers at `(x[i], y[i], z[i])` in a projected 3D box.
    pub fn scatter_3d(&self, x: &[f64], y: &[f64], z: &[f64]) -> Result<PathBuf> {
        let points = points_3d(x, y, z)?;
        let style = Style::default().color(self.config.accent_color()?).size(2.5);
        let plot = figure()
            .graph_3d(|p| {
                p.points(points, style)
                    .title("3D Scatter Plot")
                    .x_label("x")
                    .y_label("y")
                    .z_label("z")
            })
            .build();
        self.render(&plot, SCATTER_3D)
    }
}
