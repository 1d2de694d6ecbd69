//! Box-and-whisker plots.

use plotters::prelude::*;

use super::common::{
    Area, Fonts, category_range, category_tick, format_tick, padded, render_failure, rgba,
};
use super::charts_2d::chart_builder;
use crate::Result;
use crate::core::BoxPlot;
use crate::stats::quantile_sorted;

/// Box plot statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    /// Lowest value within 1.5 IQR below Q1.
    pub lower: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Highest value within 1.5 IQR above Q3.
    pub upper: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// `None` when there is no non-missing value.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);

        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        let lower = sorted
            .iter()
            .copied()
            .find(|&x| x >= lower_fence)
            .unwrap_or(q1);
        let upper = sorted
            .iter()
            .rev()
            .copied()
            .find(|&x| x <= upper_fence)
            .unwrap_or(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&x| x < lower_fence || x > upper_fence)
            .collect();

        Some(Self {
            lower,
            q1,
            median,
            q3,
            upper,
            outliers,
        })
    }

    fn extent(&self) -> (f64, f64) {
        let lo = self.outliers.iter().copied().fold(self.lower, f64::min);
        let hi = self.outliers.iter().copied().fold(self.upper, f64::max);
        (lo, hi)
    }
}

/// Draw one box per group at x = 1, 2, ...
pub fn draw_boxplot(area: &Area<'_>, chart: &BoxPlot, fonts: &Fonts<'_>) -> Result<()> {
    let labels: Vec<String> = chart.groups.iter().map(|(label, _)| label.clone()).collect();
    let stats: Vec<Option<BoxStats>> = chart
        .groups
        .iter()
        .map(|(_, v)| BoxStats::compute(v))
        .collect();

    let (y_min, y_max) = stats
        .iter()
        .flatten()
        .map(BoxStats::extent)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a), hi.max(b))
        });

    let mut ctx = chart_builder(area, &chart.meta, fonts)
        .build_cartesian_2d(category_range(labels.len(), 1.0), padded(y_min, y_max, 0.05))
        .map_err(render_failure)?;

    let x_fmt = |v: &f64| category_tick(&labels, 1.0, *v);
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

    let fill = rgba(&chart.style).filled();
    let edge = BLACK.stroke_width(fonts.px(0.8));
    let median = RGBColor(0xff, 0x7f, 0x0e).stroke_width(fonts.px(1.2));
    let hollow = ShapeStyle {
        color: BLACK.to_rgba(),
        filled: false,
        stroke_width: fonts.px(0.6),
    };
    let marker = fonts.px(2.5);
    let half = 0.25;

    for (i, s) in stats.iter().enumerate() {
        let Some(s) = s else { continue };
        let cx = i as f64 + 1.0;

        ctx.draw_series([
            Rectangle::new([(cx - half, s.q1), (cx + half, s.q3)], fill),
            Rectangle::new([(cx - half, s.q1), (cx + half, s.q3)], edge),
        ])
        .map_err(render_failure)?;

        ctx.draw_series([
            PathElement::new(vec![(cx, s.q1), (cx, s.lower)], edge),
            PathElement::new(vec![(cx, s.q3), (cx, s.upper)], edge),
            PathElement::new(vec![(cx - half / 2.0, s.lower), (cx + half / 2.0, s.lower)], edge),
            PathElement::new(vec![(cx - half / 2.0, s.upper), (cx + half / 2.0, s.upper)], edge),
            PathElement::new(vec![(cx - half, s.median), (cx + half, s.median)], median),
        ])
        .map_err(render_failure)?;

        ctx.draw_series(s.outliers.iter().map(|&o| Circle::new((cx, o), marker, hollow)))
            .map_err(render_failure)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whiskers_stop_at_last_point_inside_fences() {
        let s = BoxStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(s.q1, 2.25);
        assert_eq!(s.median, 3.5);
        assert_eq!(s.q3, 4.75);
        assert_eq!(s.lower, 1.0);
        assert_eq!(s.upper, 5.0);
        assert_eq!(s.outliers, vec![100.0]);
    }

    #[test]
    fn missing_values_are_dropped() {
        let s = BoxStats::compute(&[f64::NAN, 2.0, 2.0]).unwrap();
        assert_eq!((s.lower, s.median, s.upper), (2.0, 2.0, 2.0));
        assert!(s.outliers.is_empty());
        assert!(BoxStats::compute(&[f64::NAN]).is_none());
        assert!(BoxStats::compute(&[]).is_none());
    }
}
