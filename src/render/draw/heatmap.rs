//! Heatmap visualization with colormaps.

use error_stack::Report;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::charts_2d::chart_builder;
use super::common::{
    Area, Fonts, category_range, category_tick, format_tick, render_failure, rgb,
};
use crate::core::Heatmap;
use crate::{Result, TabvizError};

const MISSING_CELL: RGBColor = RGBColor(235, 235, 235);
const COLORBAR_STEPS: usize = 128;

/// Draw a heatmap with row/column labels, optional value annotations and
/// a colour scale bar on the right.
pub fn draw_heatmap(area: &Area<'_>, heatmap: &Heatmap, fonts: &Fonts<'_>) -> Result<()> {
    let (rows, cols) = (heatmap.rows, heatmap.cols);
    if heatmap.values.len() != rows * cols {
        return Err(Report::new(TabvizError::LengthMismatch {
            expected: rows * cols,
            actual: heatmap.values.len(),
        })
        .attach("heatmap values"));
    }

    let (vmin, vmax) = heatmap.value_range();
    let (width, _) = area.dim_in_pixel();
    let (main, bar) = area.split_horizontally(width * 84 / 100);

    // row 0 is drawn at the top
    let y_labels: Vec<String> = heatmap.row_labels.iter().rev().cloned().collect();

    let mut builder = chart_builder(&main, &heatmap.meta, fonts);
    builder.y_label_area_size(fonts.px(56.0));
    let mut ctx = builder
        .build_cartesian_2d(category_range(cols, 0.0), category_range(rows, 0.0))
        .map_err(render_failure)?;

    let x_fmt = |v: &f64| category_tick(&heatmap.col_labels, 0.0, *v);
    let y_fmt = |v: &f64| category_tick(&y_labels, 0.0, *v);
    ctx.configure_mesh()
        .disable_mesh()
        .x_labels(cols.max(1))
        .y_labels(rows.max(1))
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .label_style(fonts.tick())
        .draw()
        .map_err(render_failure)?;

    let scale = |v: f64| ((v - vmin) / (vmax - vmin)) as f32;
    let cell_color = |v: f64| {
        if v.is_nan() {
            MISSING_CELL
        } else {
            rgb(heatmap.colormap.sample(scale(v)))
        }
    };

    ctx.draw_series((0..rows).flat_map(|r| {
        (0..cols).map(move |c| {
            let (x, y) = (c as f64, (rows - 1 - r) as f64);
            Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                cell_color(heatmap.get(r, c)).filled(),
            )
        })
    }))
    .map_err(render_failure)?;

    if let Some(decimals) = heatmap.annotate {
        let centered = Pos::new(HPos::Center, VPos::Center);
        let mut labels = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                let v = heatmap.get(r, c);
                if v.is_nan() {
                    continue;
                }
                let ink = if heatmap.colormap.sample(scale(v)).luminance() > 0.5 {
                    BLACK
                } else {
                    WHITE
                };
                let style = fonts.sized(8.0).color(&ink).pos(centered);
                let at = (c as f64, (rows - 1 - r) as f64);
                labels.push(Text::new(format!("{v:.decimals$}"), at, style));
            }
        }
        ctx.draw_series(labels).map_err(render_failure)?;
    }

    draw_colorbar(&bar, heatmap, (vmin, vmax), fonts)
}

fn draw_colorbar(
    area: &Area<'_>,
    heatmap: &Heatmap,
    (vmin, vmax): (f64, f64),
    fonts: &Fonts<'_>,
) -> Result<()> {
    let mut ctx = ChartBuilder::on(area)
        .margin_top(fonts.px(34.0))
        .margin_bottom(fonts.px(40.0))
        .margin_left(fonts.px(4.0))
        .margin_right(fonts.px(4.0))
        .right_y_label_area_size(fonts.px(30.0))
        .build_cartesian_2d(0.0..1.0, vmin..vmax)
        .map_err(render_failure)?;

    let fmt = |v: &f64| format_tick(*v);
    ctx.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&fmt)
        .label_style(fonts.tick())
        .draw()
        .map_err(render_failure)?;

    let step = (vmax - vmin) / COLORBAR_STEPS as f64;
    ctx.draw_series((0..COLORBAR_STEPS).map(|i| {
        let lo = vmin + step * i as f64;
        let t = (i as f32 + 0.5) / COLORBAR_STEPS as f32;
        Rectangle::new([(0.0, lo), (1.0, lo + step)], rgb(heatmap.colormap.sample(t)).filled())
    }))
    .map_err(render_failure)?;

    Ok(())
}
