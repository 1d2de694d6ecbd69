//! The chart operations.
//!
//! Each operation validates its input, renders one chart and writes it to a
//! fixed file name under the output directory. Operations are available as
//! methods on a [`Plotter`] and as free functions that use
//! [`Plotter::from_env`].

mod basic;
mod categorical;
mod exploratory;
mod interactive;
mod scatter;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::config::{RenderConfig, load_config};
use crate::core::Plot;
use crate::frame::Table;
use crate::output::OutputDir;
use crate::render::render_png;

pub use categorical::CategoryCounts;
pub use exploratory::Exploration;

/// Output directory plus render settings shared by every operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plotter {
    out: OutputDir,
    config: RenderConfig,
}

impl Plotter {
    pub fn new(dir: impl Into<PathBuf>, config: RenderConfig) -> Self {
        Self {
            out: OutputDir::new(dir),
            config,
        }
    }

    /// Default output directory and the config named by `TABVIZ_CONFIG`, if any.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            out: OutputDir::default(),
            config: load_config()?,
        })
    }

    pub fn out_dir(&self) -> &Path {
        self.out.root()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn render(&self, plot: &Plot, name: &str) -> Result<PathBuf> {
        let path = self.out.prepare(name)?;
        render_png(plot, &path, &self.config)?;
        Ok(path)
    }
}

/// [`Plotter::category_frequency`] with the default plotter.
pub fn category_frequency<I>(labels: I) -> Result<CategoryCounts<I::Item>>
where
    I: IntoIterator,
    I::Item: Ord + Display,
{
    Plotter::from_env()?.category_frequency(labels)
}

/// [`Plotter::themed_scatter`] with the default plotter.
pub fn themed_scatter(table: &Table) -> Result<PathBuf> {
    Plotter::from_env()?.themed_scatter(table)
}

/// [`Plotter::line_1d`] with the default plotter.
pub fn line_1d(values: &[f64]) -> Result<PathBuf> {
    Plotter::from_env()?.line_1d(values)
}

/// [`Plotter::scatter_2d`] with the default plotter.
pub fn scatter_2d(x: &[f64], y: &[f64]) -> Result<PathBuf> {
    Plotter::from_env()?.scatter_2d(x, y)
}

/// [`Plotter::scatter_3d`] with the default plotter.
pub fn scatter_3d(x: &[f64], y: &[f64], z: &[f64]) -> Result<PathBuf> {
    Plotter::from_env()?.scatter_3d(x, y, z)
}

/// [`Plotter::explore`] with the default plotter.
pub fn explore(table: &Table) -> Result<Exploration> {
    Plotter::from_env()?.explore(table)
}

/// [`Plotter::interactive_scatter`] with the default plotter.
pub fn interactive_scatter(table: &Table) -> Result<PathBuf> {
    Plotter::from_env()?.interactive_scatter(table)
}
