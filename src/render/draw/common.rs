//! Shared pieces for every chart family: fonts, colours, ranges and ticks.

use std::fmt::Display;
use std::ops::Range;

use error_stack::Report;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::Color as _;

use crate::TabvizError;
use crate::config::RenderConfig;
use crate::core::{Color, Style};

pub type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Lift a plotters failure into a `Render` report.
pub fn render_failure<E: Display>(err: E) -> Report<TabvizError> {
    Report::new(TabvizError::Render).attach(err.to_string())
}

/// Point sizes converted to pixels at the configured DPI.
pub struct Fonts<'a> {
    family: &'a str,
    scale: f64,
}

impl<'a> Fonts<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            family: &config.font_family,
            scale: config.font_px(1.0),
        }
    }

    pub fn sized(&self, pt: f64) -> FontDesc<'a> {
        FontDesc::from((self.family, pt * self.scale))
    }

    pub fn title(&self) -> FontDesc<'a> {
        self.sized(12.0)
    }

    pub fn label(&self) -> FontDesc<'a> {
        self.sized(10.0)
    }

    pub fn tick(&self) -> FontDesc<'a> {
        self.sized(9.0)
    }

    /// Pixels for a length in points.
    pub fn px(&self, pt: f64) -> u32 {
        (pt * self.scale).round().max(1.0) as u32
    }
}

pub fn rgb(c: Color) -> RGBColor {
    let (r, g, b) = c.to_rgb8();
    RGBColor(r, g, b)
}

/// Fill colour of a style, opacity folded into alpha.
pub fn rgba(style: &Style) -> RGBAColor {
    rgb(style.color).mix(f64::from(style.color.a * style.opacity))
}

/// Axis range covering `[lo, hi]` with `frac` padding on each side.
/// Degenerate or empty extents fall back to something drawable.
pub fn padded(lo: f64, hi: f64, frac: f64) -> Range<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if hi - lo < 1e-12 {
        let pad = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
        return (lo - pad)..(hi + pad);
    }
    let pad = (hi - lo) * frac;
    (lo - pad)..(hi + pad)
}

/// Axis range for `n` categories centred on `offset, offset + 1, ...`.
pub fn category_range(n: usize, offset: f64) -> Range<f64> {
    (offset - 0.5)..(offset + n.max(1) as f64 - 0.5)
}

/// Tick text for a category axis: the label at integer positions, blank elsewhere.
pub fn category_tick(labels: &[String], offset: f64, value: f64) -> String {
    let pos = value - offset;
    let idx = pos.round();
    if (pos - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Format tick value for display.
pub fn format_tick(val: f64) -> String {
    if val == 0.0 {
        "0".to_string()
    } else if val.abs() < 0.001 || val.abs() >= 1e6 {
        format!("{val:.1e}")
    } else if (val - val.round()).abs() < 1e-9 {
        format!("{val:.0}")
    } else if val.abs() < 1.0 {
        trim_zeros(format!("{val:.3}"))
    } else {
        trim_zeros(format!("{val:.2}"))
    }
}

fn trim_zeros(s: String) -> String {
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_formatting() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(-2.0), "-2");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.0001), "1.0e-4");
    }

    #[test]
    fn category_ticks_only_on_integers() {
        let labels = vec!["a".to_string(), "b".to_string()];
        assert_eq!(category_tick(&labels, 0.0, 0.0), "a");
        assert_eq!(category_tick(&labels, 0.0, 1.0), "b");
        assert_eq!(category_tick(&labels, 0.0, 0.5), "");
        assert_eq!(category_tick(&labels, 0.0, 2.0), "");
        assert_eq!(category_tick(&labels, 1.0, 2.0), "b");
        assert_eq!(category_tick(&labels, 1.0, 0.0), "");
    }

    #[test]
    fn padded_ranges() {
        assert_eq!(padded(0.0, 10.0, 0.05), -0.5..10.5);
        assert_eq!(padded(0.0, 0.0, 0.05), -0.5..0.5);
        assert_eq!(padded(f64::INFINITY, f64::NEG_INFINITY, 0.05), 0.0..1.0);
        assert_eq!(category_range(3, 0.0), -0.5..2.5);
        assert_eq!(category_range(0, 1.0), 0.5..1.5);
    }
}
