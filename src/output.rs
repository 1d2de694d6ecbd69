use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use tracing::info;

use crate::{Result, TabvizError};

/// Environment variable overriding the output directory.
pub const PLOTS_DIR_ENV: &str = "TABVIZ_PLOTS_DIR";

pub const CATEGORY_FREQUENCY: &str = "category_frequency.png";
pub const THEMED_SCATTER: &str = "themed_scatter.png";
pub const LINE_1D: &str = "line_1d.png";
pub const SCATTER_2D: &str = "scatter_2d.png";
pub const SCATTER_3D: &str = "scatter_3d.png";
pub const DESCRIPTIVE_STATISTICS: &str = "descriptive_statistics.csv";
pub const BOXPLOT: &str = "boxplot.png";
pub const CORRELATION_HEATMAP: &str = "correlation_heatmap.png";
pub const FINDINGS: &str = "findings.txt";
pub const INTERACTIVE_SCATTER: &str = "interactive_scatter.html";

/// Directory every artifact is written to. Created on first use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDir {
    root: PathBuf,
}

impl Default for OutputDir {
    /// `plots/` under the crate root, or [`PLOTS_DIR_ENV`] when set.
    fn default() -> Self {
        let root = env::var_os(PLOTS_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("plots"));
        Self { root }
    }
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `name` inside the directory, without touching the filesystem.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Create the directory if needed and return the path of `name` in it.
    pub fn prepare(&self, name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)
            .change_context(TabvizError::Io)
            .attach_with(|| format!("creating {}", self.root.display()))?;
        Ok(self.path(name))
    }

    /// Write a text artifact, replacing any previous file.
    pub fn write_text(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.prepare(name)?;
        fs::write(&path, contents)
            .change_context(TabvizError::Io)
            .attach_with(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
        Ok(path)
    }
}
