use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors and stroke metrics for the candle/axis scene.
///
/// Primary-series candles use the full colors; overlay series use the muted
/// pair. Bullish bodies are filled, bearish bodies are outlined, so the two
/// directions stay distinguishable without color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub up_color: Color,
    pub down_color: Color,
    pub muted_up_color: Color,
    pub muted_down_color: Color,
    pub axis_color: Color,
    pub text_color: Color,
    /// Stroke width for wicks and outlined bodies.
    pub thin_line_width: f64,
    /// Horizontal gap between consecutive candles.
    pub spacing_px: f64,
    /// Number of divisions on the price axis.
    pub tick_count: usize,
    /// Draw short horizontal terminators at the wick ends.
    pub wick_caps: bool,
    /// Assumed tooltip box width, used to flip its placement near the edge.
    pub tooltip_width_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            // Red-up / green-down market convention.
            up_color: Color::rgb(0.86, 0.20, 0.20),
            down_color: Color::rgb(0.13, 0.55, 0.13),
            muted_up_color: Color::rgb(0.66, 0.66, 0.66),
            muted_down_color: Color::rgb(0.45, 0.45, 0.45),
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            text_color: Color::rgb(0.0, 0.0, 0.0),
            thin_line_width: 1.0,
            spacing_px: 2.0,
            tick_count: 10,
            wick_caps: false,
            tooltip_width_px: 120.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.up_color,
            self.down_color,
            self.muted_up_color,
            self.muted_down_color,
            self.axis_color,
            self.text_color,
        ] {
            color.validate()?;
        }

        if !self.thin_line_width.is_finite() || self.thin_line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "thin line width must be finite and > 0".to_owned(),
            ));
        }

        if !self.spacing_px.is_finite() || self.spacing_px < 0.0 {
            return Err(ChartError::InvalidData(
                "candle spacing must be finite and >= 0".to_owned(),
            ));
        }

        if self.tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick count must be >= 1".to_owned(),
            ));
        }

        if !self.tooltip_width_px.is_finite() || self.tooltip_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip width must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}
