//! Raster rendering of chart specs with the plotters bitmap backend.

pub mod draw;

use std::path::Path;

use error_stack::{Report, ResultExt};
use glam::{DVec2, DVec3};
use plotters::prelude::*;
use tracing::info;

use crate::config::RenderConfig;
use crate::core::Plot;
use crate::{Result, TabvizError};
use draw::{Fonts, render_failure, rgb};

/// Render `plot` to a PNG at `path`, replacing any existing file.
///
/// The image is the plot's figure size in inches times the configured DPI.
pub fn render_png(plot: &Plot, path: &Path, config: &RenderConfig) -> Result<()> {
    config.validate()?;
    let (width, height) = config.pixels(plot.figure_size());
    let background = rgb(config.background_color()?);
    let fonts = Fonts::new(config);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&background).map_err(render_failure)?;

    let drawn = match plot {
        Plot::Bars(chart) => draw::draw_bars(&root, chart, &fonts),
        Plot::Graph2D(graph) => draw::draw_2d_plot(&root, graph, &fonts),
        Plot::Graph3D(graph) => draw::draw_3d_plot(&root, graph, &fonts),
        Plot::BoxPlot(chart) => draw::draw_boxplot(&root, chart, &fonts),
        Plot::Heatmap(heatmap) => draw::draw_heatmap(&root, heatmap, &fonts),
    };
    drawn.attach_with(|| format!("drawing {}", plot.kind()))?;

    root.present()
        .map_err(render_failure)
        .attach_with(|| format!("saving {}", path.display()))?;

    info!(path = %path.display(), kind = plot.kind(), width, height, "wrote artifact");
    Ok(())
}

fn ensure_same_len(expected: usize, actual: usize, what: &str) -> Result<()> {
    if expected != actual {
        return Err(Report::new(TabvizError::LengthMismatch { expected, actual })
            .attach(format!("{what} has {actual} values, x has {expected}")));
    }
    Ok(())
}

/// Pair coordinate arrays into points. Unequal lengths are an error, never truncated.
pub fn points_2d(x: &[f64], y: &[f64]) -> Result<Vec<DVec2>> {
    ensure_same_len(x.len(), y.len(), "y")?;
    Ok(x.iter().zip(y).map(|(&x, &y)| DVec2::new(x, y)).collect())
}

/// Three-axis version of [`points_2d`].
pub fn points_3d(x: &[f64], y: &[f64], z: &[f64]) -> Result<Vec<DVec3>> {
    ensure_same_len(x.len(), y.len(), "y")?;
    ensure_same_len(x.len(), z.len(), "z")?;
    Ok(x.iter()
        .zip(y)
        .zip(z)
        .map(|((&x, &y), &z)| DVec3::new(x, y, z))
        .collect())
}
