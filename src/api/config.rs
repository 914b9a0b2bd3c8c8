use serde::{Deserialize, Serialize};

use crate::core::{MIN_PLOT_SIZE, validate_zoom};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    Color, DEFAULT_AXIS_COLOR_HEX, DEFAULT_BACKGROUND_COLOR_HEX, DEFAULT_GRID_COLOR_HEX,
    DEFAULT_LINE_COLOR_HEX, PlotStyle,
};

/// Pixels per data unit used by the interval viewers.
pub const DEFAULT_ZOOM: f64 = 20.0;
/// Pixels per data unit used by the first plotting viewer.
pub const COMPACT_ZOOM: f64 = 10.0;

/// Public plot view bootstrap configuration.
///
/// Serializable so host applications can persist plot setup alongside their
/// own settings. Colors are `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotViewConfig {
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_min_plot_size")]
    pub min_plot_size: u32,
    #[serde(default = "default_line_color")]
    pub line_color: String,
    #[serde(default = "default_grid_color")]
    pub grid_color: String,
    #[serde(default = "default_axis_color")]
    pub axis_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
}

impl Default for PlotViewConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            min_plot_size: default_min_plot_size(),
            line_color: default_line_color(),
            grid_color: default_grid_color(),
            axis_color: default_axis_color(),
            background_color: default_background_color(),
            stroke_width: default_stroke_width(),
            font_size_px: default_font_size_px(),
        }
    }
}

impl PlotViewConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_min_plot_size(mut self, min_plot_size: u32) -> Self {
        self.min_plot_size = min_plot_size;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, line_color: impl Into<String>) -> Self {
        self.line_color = line_color.into();
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        validate_zoom(self.zoom)?;
        if self.min_plot_size == 0 {
            return Err(PlotError::InvalidArgument(
                "minimum plot size must be >= 1".to_owned(),
            ));
        }
        self.style()?.validate()
    }

    /// Resolves the configured colors into a drawable style.
    pub fn style(&self) -> PlotResult<PlotStyle> {
        Ok(PlotStyle {
            line_color: parse_color("line_color", &self.line_color)?,
            grid_color: parse_color("grid_color", &self.grid_color)?,
            axis_color: parse_color("axis_color", &self.axis_color)?,
            background_color: parse_color("background_color", &self.background_color)?,
            stroke_width: self.stroke_width,
            font_size_px: self.font_size_px,
            ..PlotStyle::default()
        })
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::Persistence(format!("failed to serialize plot view config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            PlotError::Persistence(format!("failed to parse plot view config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_color(field: &str, value: &str) -> PlotResult<Color> {
    Color::from_hex(value).ok_or_else(|| {
        PlotError::InvalidArgument(format!("`{field}` must be a #rrggbb color, got `{value}`"))
    })
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

fn default_min_plot_size() -> u32 {
    MIN_PLOT_SIZE
}

fn default_line_color() -> String {
    DEFAULT_LINE_COLOR_HEX.to_owned()
}

fn default_grid_color() -> String {
    DEFAULT_GRID_COLOR_HEX.to_owned()
}

fn default_axis_color() -> String {
    DEFAULT_AXIS_COLOR_HEX.to_owned()
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR_HEX.to_owned()
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_font_size_px() -> f64 {
    11.0
}
