//! 3D scatter rendering on a projected box with grid panels.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::common::{Area, Fonts, format_tick, padded, render_failure, rgba};
use crate::Result;
use crate::core::Graph3D;

/// Draw a 3D scatter with labelled axes.
pub fn draw_3d_plot(area: &Area<'_>, graph: &Graph3D, fonts: &Fonts<'_>) -> Result<()> {
    let (min, max) = graph.bounds();
    let x_range = padded(min[0], max[0], 0.02);
    let y_range = padded(min[1], max[1], 0.02);
    let z_range = padded(min[2], max[2], 0.02);

    let mut builder = ChartBuilder::on(area);
    builder.margin(fonts.px(10.0));
    if let Some(title) = &graph.meta.title {
        builder.caption(title, fonts.title());
    }
    let mut ctx = builder
        .build_cartesian_3d(x_range.clone(), y_range.clone(), z_range.clone())
        .map_err(render_failure)?;

    ctx.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.3;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    let fmt = |v: &f64| format_tick(*v);
    ctx.configure_axes()
        .light_grid_style(BLACK.mix(0.08))
        .bold_grid_style(BLACK.mix(0.2))
        .max_light_lines(2)
        .label_style(fonts.tick())
        .x_formatter(&fmt)
        .y_formatter(&fmt)
        .z_formatter(&fmt)
        .draw()
        .map_err(render_failure)?;

    // axis names sit just past the far end of each axis
    let label = fonts.label().color(&BLACK).pos(Pos::new(HPos::Center, VPos::Center));
    let axis_names = [
        (graph.meta.x_label.as_deref(), (x_range.end, y_range.start, z_range.start)),
        (graph.meta.y_label.as_deref(), (x_range.start, y_range.end, z_range.start)),
        (graph.z_label.as_deref(), (x_range.start, y_range.start, z_range.end)),
    ];
    ctx.draw_series(axis_names.into_iter().filter_map(|(name, at)| {
        name.map(|n| Text::new(n.to_string(), at, label.clone()))
    }))
    .map_err(render_failure)?;

    let fill = rgba(&graph.style).filled();
    let radius = fonts.px(f64::from(graph.style.size));
    ctx.draw_series(
        graph
            .points
            .iter()
            .filter(|p| p.is_finite())
            .map(|p| Circle::new((p.x, p.y, p.z), radius, fill)),
    )
    .map_err(render_failure)?;

    Ok(())
}
