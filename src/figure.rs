use crate::core::{
    BarChart, BoxPlot, Colormap, Geometry2D, Graph2D, Graph3D, Heatmap, Layer2D, Plot, Style,
    Theme,
};
use glam::{DVec2, DVec3};

/// Entry point for building a single chart spec.
///
/// ```
/// use glam::DVec2;
/// use tabviz::core::Style;
/// use tabviz::figure::figure;
///
/// let xy = vec![DVec2::new(0.0, 1.0), DVec2::new(1.0, 3.0)];
/// let plot = figure()
///     .graph_2d(|p| p.line(xy, Style::default()).title("t"))
///     .build();
/// assert_eq!(plot.meta().title.as_deref(), Some("t"));
/// ```
pub fn figure() -> FigureBuilder {
    FigureBuilder
}

pub struct FigureBuilder;

impl FigureBuilder {
    pub fn bars<F>(self, f: F) -> Built
    where
        F: FnOnce(BarBuilder) -> BarBuilder,
    {
        Built(Plot::Bars(f(BarBuilder::default()).chart))
    }

    pub fn graph_2d<F>(self, f: F) -> Built
    where
        F: FnOnce(Plot2DBuilder) -> Plot2DBuilder,
    {
        Built(Plot::Graph2D(f(Plot2DBuilder::default()).graph))
    }

    pub fn graph_3d<F>(self, f: F) -> Built
    where
        F: FnOnce(Plot3DBuilder) -> Plot3DBuilder,
    {
        Built(Plot::Graph3D(f(Plot3DBuilder::default()).graph))
    }

    pub fn boxplot<F>(self, f: F) -> Built
    where
        F: FnOnce(BoxBuilder) -> BoxBuilder,
    {
        Built(Plot::BoxPlot(f(BoxBuilder::default()).chart))
    }

    pub fn heatmap<F>(self, f: F) -> Built
    where
        F: FnOnce(HeatmapBuilder) -> HeatmapBuilder,
    {
        Built(Plot::Heatmap(f(HeatmapBuilder::default()).heatmap))
    }
}

/// A finished spec, ready for `render::render_png`.
pub struct Built(Plot);

impl Built {
    pub fn build(self) -> Plot {
        self.0
    }
}

// Title and axis labels are set the same way on every builder.
macro_rules! meta_setters {
    ($field:ident) => {
        /// Set the chart title
        pub fn title(mut self, title: impl Into<String>) -> Self {
            self.$field.meta.title = Some(title.into());
            self
        }

        /// Set the X-axis label
        pub fn x_label(mut self, label: impl Into<String>) -> Self {
            self.$field.meta.x_label = Some(label.into());
            self
        }

        /// Set the Y-axis label
        pub fn y_label(mut self, label: impl Into<String>) -> Self {
            self.$field.meta.y_label = Some(label.into());
            self
        }
    };
}

/* -------------------- BAR BUILDER -------------------- */

#[derive(Default)]
pub struct BarBuilder {
    chart: BarChart,
}

impl BarBuilder {
    meta_setters!(chart);

    pub fn bar(mut self, label: impl Into<String>, height: f64) -> Self {
        self.chart.bars.push((label.into(), height));
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.chart.style = style;
        self
    }
}

/* -------------------- PLOT 2D BUILDER -------------------- */

#[derive(Default)]
pub struct Plot2DBuilder {
    graph: Graph2D,
}

impl Plot2DBuilder {
    meta_setters!(graph);

    fn push_layer(mut self, geometry: Geometry2D, xy: Vec<DVec2>, style: Option<Style>) -> Self {
        let mut layer = Layer2D::new(geometry, xy);
        if let Some(st) = style {
            layer.style = st;
        }
        self.graph.layers.push(layer);
        self
    }

    pub fn line(self, xy: Vec<DVec2>, style: impl Into<Option<Style>>) -> Self {
        self.push_layer(Geometry2D::Line, xy, style.into())
    }

    pub fn scatter(self, xy: Vec<DVec2>, style: impl Into<Option<Style>>) -> Self {
        self.push_layer(Geometry2D::Points, xy, style.into())
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.graph.theme = theme;
        self
    }
}

// Allow passing &Style into the `impl Into<Option<Style>>` slot.
impl From<&Style> for Option<Style> {
    #[inline]
    fn from(s: &Style) -> Self {
        Some(*s)
    }
}

/* -------------------- PLOT 3D BUILDER -------------------- */

#[derive(Default)]
pub struct Plot3DBuilder {
    graph: Graph3D,
}

impl Plot3DBuilder {
    meta_setters!(graph);

    pub fn points(mut self, xyz: Vec<DVec3>, style: impl Into<Option<Style>>) -> Self {
        self.graph.points.extend(xyz);
        if let Some(st) = style.into() {
            self.graph.style = st;
        }
        self
    }

    /// Set the Z-axis label
    pub fn z_label(mut self, label: impl Into<String>) -> Self {
        self.graph.z_label = Some(label.into());
        self
    }
}

/* -------------------- BOXPLOT BUILDER -------------------- */

#[derive(Default)]
pub struct BoxBuilder {
    chart: BoxPlot,
}

impl BoxBuilder {
    meta_setters!(chart);

    pub fn group(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.chart.groups.push((label.into(), values));
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.chart.style = style;
        self
    }
}

/* -------------------- HEATMAP BUILDER -------------------- */

#[derive(Default)]
pub struct HeatmapBuilder {
    heatmap: Heatmap,
}

impl HeatmapBuilder {
    meta_setters!(heatmap);

    /// Set the grid values, row-major, with one label per row and column.
    pub fn grid(
        mut self,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        self.heatmap.rows = row_labels.len();
        self.heatmap.cols = col_labels.len();
        self.heatmap.row_labels = row_labels;
        self.heatmap.col_labels = col_labels;
        self.heatmap.values = values;
        self
    }

    /// Print each cell's value with `decimals` places.
    pub fn annotate(mut self, decimals: usize) -> Self {
        self.heatmap.annotate = Some(decimals);
        self
    }

    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.heatmap.colormap = colormap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_builder_keeps_order() {
        let plot = figure()
            .bars(|b| b.bar("b", 2.0).bar("a", 1.0).title("Counts"))
            .build();
        let Plot::Bars(chart) = plot else {
            panic!("expected bar chart");
        };
        assert_eq!(chart.bars, vec![("b".to_string(), 2.0), ("a".to_string(), 1.0)]);
        assert_eq!(chart.meta.title.as_deref(), Some("Counts"));
    }

    #[test]
    fn heatmap_grid_sets_shape() {
        let plot = figure()
            .heatmap(|h| {
                h.grid(
                    vec!["r0".into(), "r1".into()],
                    vec!["c0".into(), "c1".into(), "c2".into()],
                    vec![0.0; 6],
                )
                .annotate(2)
            })
            .build();
        let Plot::Heatmap(h) = plot else {
            panic!("expected heatmap");
        };
        assert_eq!((h.rows, h.cols), (2, 3));
        assert_eq!(h.annotate, Some(2));
    }
}
