use serde::{Deserialize, Serialize};

use crate::core::{ScaleTuning, ViewWindow, Viewport, WindowBounds};

use super::ChartStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format. The viewport may be zero-sized at
/// startup; hosts usually deliver the first real size through `resize`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_window")]
    pub window: ViewWindow,
    #[serde(default)]
    pub window_bounds: WindowBounds,
    #[serde(default)]
    pub scale_tuning: ScaleTuning,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            window: default_window(),
            window_bounds: WindowBounds::default(),
            scale_tuning: ScaleTuning::default(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_window(mut self, start_index: usize, window_size: usize) -> Self {
        self.window = ViewWindow::new(start_index, window_size);
        self
    }

    #[must_use]
    pub fn with_window_bounds(mut self, bounds: WindowBounds) -> Self {
        self.window_bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_scale_tuning(mut self, tuning: ScaleTuning) -> Self {
        self.scale_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }
}

fn default_window() -> ViewWindow {
    ViewWindow::new(0, WindowBounds::default().min_size)
}
