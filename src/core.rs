use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Common metadata for all chart types
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlotMeta {
    /// Title displayed at the top of the chart
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Channels as bytes, alpha dropped.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// Relative luminance, used to pick a readable annotation colour.
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub size: f32,    // line width / marker radius
    pub opacity: f32, // multiplied into alpha
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 2.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    #[inline]
    pub const fn color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    #[inline]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Background treatment of a 2D chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    /// Plain axes, no grid.
    #[default]
    Plain,
    /// White background with a light grid drawn at the given alpha.
    WhiteGrid { grid_alpha: f32 },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Plot {
    Bars(BarChart),
    Graph2D(Graph2D),
    Graph3D(Graph3D),
    BoxPlot(BoxPlot),
    Heatmap(Heatmap),
}

impl Plot {
    pub fn meta(&self) -> &PlotMeta {
        match self {
            Plot::Bars(p) => &p.meta,
            Plot::Graph2D(p) => &p.meta,
            Plot::Graph3D(p) => &p.meta,
            Plot::BoxPlot(p) => &p.meta,
            Plot::Heatmap(p) => &p.meta,
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Plot::Bars(_) => "bars",
            Plot::Graph2D(_) => "graph_2d",
            Plot::Graph3D(_) => "graph_3d",
            Plot::BoxPlot(_) => "boxplot",
            Plot::Heatmap(_) => "heatmap",
        }
    }

    /// Figure size in inches; multiplied by the configured DPI at render time.
    pub fn figure_size(&self) -> (f64, f64) {
        match self {
            Plot::BoxPlot(_) => (7.0, 4.0),
            Plot::Heatmap(_) => (6.0, 5.0),
            _ => (6.0, 4.0),
        }
    }
}

/// One bar per category, in the order given.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BarChart {
    pub meta: PlotMeta,
    pub bars: Vec<(String, f64)>,
    pub style: Style,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Graph2D {
    pub meta: PlotMeta,
    pub layers: Vec<Layer2D>,
    pub theme: Theme,
}

impl Graph2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, layer: Layer2D) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        let mut any = false;
        for l in &self.layers {
            for p in &l.xy {
                if !p.x.is_finite() || !p.y.is_finite() {
                    continue;
                }
                min[0] = min[0].min(p.x);
                min[1] = min[1].min(p.y);
                max[0] = max[0].max(p.x);
                max[1] = max[1].max(p.y);
                any = true;
            }
        }
        any.then_some((min, max))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry2D {
    Line,
    Points,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layer2D {
    pub geometry: Geometry2D,
    pub xy: Vec<DVec2>,
    pub style: Style,
}

impl Layer2D {
    pub fn new(geometry: Geometry2D, xy: Vec<DVec2>) -> Self {
        Self {
            geometry,
            xy,
            style: Style::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Graph3D {
    pub meta: PlotMeta,
    pub points: Vec<DVec3>,
    pub style: Style,
    pub z_label: Option<String>,
}

impl Graph3D {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-axis (min, max) over finite points, widened when degenerate.
    pub fn bounds(&self) -> ([f64; 3], [f64; 3]) {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];

        for pt in self.points.iter().filter(|p| p.is_finite()) {
            for (axis, v) in pt.to_array().into_iter().enumerate() {
                min[axis] = min[axis].min(v);
                max[axis] = max[axis].max(v);
            }
        }

        for axis in 0..3 {
            if !min[axis].is_finite() || !max[axis].is_finite() {
                min[axis] = 0.0;
                max[axis] = 1.0;
            } else if min[axis] >= max[axis] {
                min[axis] -= 0.5;
                max[axis] += 0.5;
            }
        }

        (min, max)
    }
}

/// Grouped box-and-whisker chart; each group is (label, values).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoxPlot {
    pub meta: PlotMeta,
    pub groups: Vec<(String, Vec<f64>)>,
    pub style: Style,
}

/// Square or rectangular grid of values with labelled axes
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Heatmap {
    pub meta: PlotMeta,
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<f64>, // row-major: values[row * cols + col]
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// Decimal places for in-cell annotations; `None` hides them.
    pub annotate: Option<usize>,
    pub colormap: Colormap,
}

impl Heatmap {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Colour-scale limits: the extent of the finite values.
    pub fn value_range(&self) -> (f64, f64) {
        let finite = || self.values.iter().copied().filter(|v| v.is_finite());
        let vmin = finite().fold(f64::INFINITY, f64::min);
        let vmax = finite().fold(f64::NEG_INFINITY, f64::max);
        if !vmin.is_finite() || !vmax.is_finite() {
            return (0.0, 1.0);
        }
        if vmax - vmin < 1e-12 {
            return (vmin - 0.5, vmax + 0.5);
        }
        (vmin, vmax)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq)]
pub enum Colormap {
    #[default]
    Viridis,
    Coolwarm, // diverging: blue-white-red
    Blues,
}

impl Colormap {
    /// Map value in [0, 1] to RGB color
    pub fn sample(&self, t: f32) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Colormap::Viridis => Self::viridis(t),
            Colormap::Coolwarm => Self::coolwarm(t),
            Colormap::Blues => Self::blues(t),
        }
    }

    fn ramp(stops: &[Color], t: f32) -> Color {
        let segments = (stops.len() - 1) as f32;
        let pos = t * segments;
        let idx = (pos.floor() as usize).min(stops.len() - 2);
        stops[idx].lerp(stops[idx + 1], pos - idx as f32)
    }

    fn viridis(t: f32) -> Color {
        const STOPS: [Color; 5] = [
            Color::rgb(0.267, 0.005, 0.329),
            Color::rgb(0.231, 0.322, 0.545),
            Color::rgb(0.129, 0.569, 0.549),
            Color::rgb(0.369, 0.788, 0.384),
            Color::rgb(0.993, 0.906, 0.144),
        ];
        Self::ramp(&STOPS, t)
    }

    fn coolwarm(t: f32) -> Color {
        const STOPS: [Color; 3] = [
            Color::rgb(0.230, 0.299, 0.754),
            Color::rgb(0.865, 0.865, 0.865),
            Color::rgb(0.706, 0.016, 0.150),
        ];
        Self::ramp(&STOPS, t)
    }

    fn blues(t: f32) -> Color {
        const STOPS: [Color; 2] = [Color::rgb(0.969, 0.984, 1.0), Color::rgb(0.031, 0.188, 0.420)];
        Self::ramp(&STOPS, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        let c = Color::from_hex("#1f77b4").unwrap();
        assert_eq!(c.to_rgb8(), (0x1f, 0x77, 0xb4));
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
    }

    #[test]
    fn colormap_endpoints() {
        let lo = Colormap::Viridis.sample(0.0);
        let hi = Colormap::Viridis.sample(1.0);
        assert!(lo.luminance() < hi.luminance());
        // out-of-range and NaN inputs clamp instead of panicking
        assert_eq!(Colormap::Viridis.sample(2.0), hi);
        assert_eq!(Colormap::Viridis.sample(f32::NAN), lo);
    }

    #[test]
    fn graph_bounds_skip_non_finite() {
        let g = Graph2D::new().with_layer(Layer2D::new(
            Geometry2D::Points,
            vec![DVec2::new(1.0, 2.0), DVec2::new(f64::NAN, 9.0), DVec2::new(3.0, -1.0)],
        ));
        assert_eq!(g.bounds(), Some(([1.0, -1.0], [3.0, 2.0])));
        assert_eq!(Graph2D::new().bounds(), None);
    }

    #[test]
    fn heatmap_range_widens_constant_grid() {
        let h = Heatmap {
            rows: 1,
            cols: 2,
            values: vec![1.0, 1.0],
            ..Default::default()
        };
        assert_eq!(h.value_range(), (0.5, 1.5));
    }
}
