use tracing::{debug, warn};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

pub const DEFAULT_LINE_COLOR_HEX: &str = "#fe0101";
pub const DEFAULT_GRID_COLOR_HEX: &str = "#e8e9ef";
pub const DEFAULT_AXIS_COLOR_HEX: &str = "#494949";
pub const DEFAULT_BACKGROUND_COLOR_HEX: &str = "#fbf8f5";

/// Colors and stroke settings for one plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    pub line_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    pub background_color: Color,
    pub stroke_width: f64,
    pub font_size_px: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            line_color: Color::from_rgb8(0xfe, 0x01, 0x01),
            grid_color: Color::from_rgb8(0xe8, 0xe9, 0xef),
            axis_color: Color::from_rgb8(0x49, 0x49, 0x49),
            label_color: Color::rgb(0.0, 0.0, 0.0),
            background_color: Color::from_rgb8(0xfb, 0xf8, 0xf5),
            stroke_width: 1.0,
            font_size_px: 11.0,
        }
    }
}

impl PlotStyle {
    /// Replaces the function line color when `hex` is a valid `#rrggbb`
    /// string. Invalid input keeps the current color and returns `false`.
    pub fn set_line_color_hex(&mut self, hex: &str) -> bool {
        match Color::from_hex(hex) {
            Some(color) => {
                debug!(color = hex, "line color updated");
                self.line_color = color;
                true
            }
            None => {
                warn!(color = hex, "ignoring invalid line color");
                false
            }
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        self.line_color.validate()?;
        self.grid_color.validate()?;
        self.axis_color.validate()?;
        self.label_color.validate()?;
        self.background_color.validate()?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
