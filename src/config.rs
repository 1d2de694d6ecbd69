use std::env;
use std::fs;
use std::path::Path;

use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Color, Colormap};
use crate::{Result, TabvizError};

/// Environment variable naming an optional JSON render config file.
pub const CONFIG_ENV: &str = "TABVIZ_CONFIG";

/// Raster settings shared by every chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixels per inch; figure sizes are given in inches.
    pub dpi: u32,
    pub font_family: String,
    /// Canvas fill as `#rrggbb`.
    pub background: String,
    /// Marker, line and bar colour.
    pub accent: String,
    /// Marker colour of the themed scatter.
    pub themed_accent: String,
    pub colormap: Colormap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 150,
            font_family: "sans-serif".to_string(),
            background: "#ffffff".to_string(),
            accent: "#1f77b4".to_string(),
            themed_accent: "#4c72b0".to_string(),
            colormap: Colormap::Viridis,
        }
    }
}

impl RenderConfig {
    /// Pixel dimensions of a figure of `(width, height)` inches.
    pub fn pixels(&self, (w, h): (f64, f64)) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((w * dpi).round() as u32, (h * dpi).round() as u32)
    }

    /// Font size in pixels for a size given in points.
    pub fn font_px(&self, pt: f64) -> f64 {
        pt * f64::from(self.dpi) / 72.0
    }

    pub fn background_color(&self) -> Result<Color> {
        parse_color("background", &self.background)
    }

    pub fn accent_color(&self) -> Result<Color> {
        parse_color("accent", &self.accent)
    }

    pub fn themed_accent_color(&self) -> Result<Color> {
        parse_color("themed_accent", &self.themed_accent)
    }

    /// Reject values that would only fail later, mid-render.
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(Report::new(TabvizError::Config).attach("dpi must be positive"));
        }
        self.background_color()?;
        self.accent_color()?;
        self.themed_accent_color()?;
        Ok(())
    }
}

fn parse_color(field: &str, hex: &str) -> Result<Color> {
    Color::from_hex(hex).ok_or_else(|| {
        Report::new(TabvizError::Config).attach(format!("{field}: invalid colour '{hex}'"))
    })
}

/// Load the config named by [`CONFIG_ENV`], or the default when unset.
pub fn load_config() -> Result<RenderConfig> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => load_config_from(Path::new(&path)),
        None => Ok(RenderConfig::default()),
    }
}

/// Load and validate a JSON config file. Missing fields take their defaults.
pub fn load_config_from(path: &Path) -> Result<RenderConfig> {
    let text = fs::read_to_string(path)
        .change_context(TabvizError::Config)
        .attach_with(|| format!("reading {}", path.display()))?;
    let config: RenderConfig = serde_json::from_str(&text)
        .change_context(TabvizError::Config)
        .attach_with(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    debug!(path = %path.display(), dpi = config.dpi, "loaded render config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_figure_is_900_by_600() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.pixels((6.0, 4.0)), (900, 600));
        assert_eq!(cfg.pixels((7.0, 4.0)), (1050, 600));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r##"{ "dpi": 100, "accent": "#ff0000" }"##).unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.dpi, 100);
        assert_eq!(cfg.accent_color().unwrap().to_rgb8(), (255, 0, 0));
        assert_eq!(cfg.background, "#ffffff");
    }

    #[test]
    fn bad_colour_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "background": "white" }"#).unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.current_context(), &TabvizError::Config);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_config_from(Path::new("/nonexistent/tabviz.json")).unwrap_err();
        assert_eq!(err.current_context(), &TabvizError::Config);
    }
}
