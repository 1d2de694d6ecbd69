//! Drawing functions for all chart types.
//!
//! This module is organized into focused submodules:
//! - `common`: Shared utilities (fonts, colours, ranges, tick text)
//! - `charts_2d`: Category bars and 2D scatter/line plots
//! - `charts_3d`: 3D scatter plots
//! - `distribution`: Box plots
//! - `heatmap`: Grid-based color visualizations

mod charts_2d;
mod charts_3d;
mod common;
mod distribution;
mod heatmap;

pub use charts_2d::{draw_2d_plot, draw_bars};
pub use charts_3d::draw_3d_plot;
pub use common::{Area, Fonts, format_tick, render_failure, rgb};
pub use distribution::{BoxStats, draw_boxplot};
pub use heatmap::draw_heatmap;
