//! 2D chart rendering: category bars, line charts and scatter plots.

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use super::common::{
    Area, Fonts, category_range, category_tick, format_tick, padded, render_failure, rgba,
};
use crate::Result;
use crate::core::{BarChart, Geometry2D, Graph2D, Layer2D, PlotMeta, Theme};

/// Builder with the margins, label areas and caption every 2D chart shares.
pub fn chart_builder<'a, 'b, 'c>(
    area: &'a Area<'c>,
    meta: &PlotMeta,
    fonts: &Fonts<'b>,
) -> ChartBuilder<'a, 'b, BitMapBackend<'c>> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(fonts.px(10.0))
        .x_label_area_size(fonts.px(30.0))
        .y_label_area_size(fonts.px(40.0));
    if let Some(title) = &meta.title {
        builder.caption(title, fonts.title());
    }
    builder
}

/// One filled bar per category, in the order given.
pub fn draw_bars(area: &Area<'_>, chart: &BarChart, fonts: &Fonts<'_>) -> Result<()> {
    let labels: Vec<String> = chart.bars.iter().map(|(label, _)| label.clone()).collect();
    let top = chart
        .bars
        .iter()
        .map(|&(_, h)| h)
        .filter(|h| h.is_finite())
        .fold(0.0, f64::max);
    let y_range = 0.0..if top > 0.0 { top * 1.05 } else { 1.0 };

    let mut ctx = chart_builder(area, &chart.meta, fonts)
        .build_cartesian_2d(category_range(labels.len(), 0.0), y_range)
        .map_err(render_failure)?;

    let x_fmt = |v: &f64| category_tick(&labels, 0.0, *v);
    let y_fmt = |v: &f64| format_tick(*v);
    ctx.configure_mesh()
        .disable_mesh()
        .x_labels(labels.len().max(1))
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .x_desc(chart.meta.x_label.clone().unwrap_or_default())
        .y_desc(chart.meta.y_label.clone().unwrap_or_default())
        .label_style(fonts.tick())
        .axis_desc_style(fonts.label())
        .draw()
        .map_err(render_failure)?;

    let fill = rgba(&chart.style);
    ctx.draw_series(
        chart
            .bars
            .iter()
            .enumerate()
            .filter(|(_, (_, h))| h.is_finite())
            .map(|(i, &(_, h))| {
                let x = i as f64;
                Rectangle::new([(x - 0.4, 0.0), (x + 0.4, h)], fill.filled())
            }),
    )
    .map_err(render_failure)?;

    Ok(())
}

/// Draw a 2D plot with multiple layers (lines, points).
pub fn draw_2d_plot(area: &Area<'_>, graph: &Graph2D, fonts: &Fonts<'_>) -> Result<()> {
    let (x_range, y_range) = match graph.bounds() {
        Some((min, max)) => (padded(min[0], max[0], 0.05), padded(min[1], max[1], 0.05)),
        None => (0.0..1.0, 0.0..1.0),
    };

    let mut ctx = chart_builder(area, &graph.meta, fonts)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_failure)?;

    let fmt = |v: &f64| format_tick(*v);
    let mut mesh = ctx.configure_mesh();
    mesh.x_label_formatter(&fmt)
        .y_label_formatter(&fmt)
        .x_desc(graph.meta.x_label.clone().unwrap_or_default())
        .y_desc(graph.meta.y_label.clone().unwrap_or_default())
        .label_style(fonts.tick())
        .axis_desc_style(fonts.label());
    match graph.theme {
        Theme::Plain => {
            mesh.disable_mesh();
        }
        Theme::WhiteGrid { grid_alpha } => {
            let grid = BLACK.mix(f64::from(grid_alpha) * 0.5);
            mesh.bold_line_style(grid.stroke_width(1))
                .light_line_style(TRANSPARENT)
                .axis_style(BLACK.mix(0.3));
        }
    }
    mesh.draw().map_err(render_failure)?;

    for layer in &graph.layers {
        match layer.geometry {
            Geometry2D::Line => draw_line_layer(&mut ctx, layer, fonts)?,
            Geometry2D::Points => draw_points_layer(&mut ctx, layer, fonts)?,
        }
    }

    Ok(())
}

type Ctx2D<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn finite_points(layer: &Layer2D) -> impl Iterator<Item = (f64, f64)> + '_ {
    layer
        .xy
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| (p.x, p.y))
}

fn draw_line_layer(ctx: &mut Ctx2D<'_, '_>, layer: &Layer2D, fonts: &Fonts<'_>) -> Result<()> {
    let stroke = rgba(&layer.style).stroke_width(fonts.px(f64::from(layer.style.size)));
    ctx.draw_series(LineSeries::new(finite_points(layer), stroke))
        .map_err(render_failure)?;
    Ok(())
}

fn draw_points_layer(ctx: &mut Ctx2D<'_, '_>, layer: &Layer2D, fonts: &Fonts<'_>) -> Result<()> {
    let fill = rgba(&layer.style).filled();
    let radius = fonts.px(f64::from(layer.style.size));
    ctx.draw_series(finite_points(layer).map(|p| Circle::new(p, radius, fill)))
        .map_err(render_failure)?;
    Ok(())
}
