use serde::{Deserialize, Serialize};

use crate::core::bar::OhlcBar;
use crate::core::layout::FrameLayout;
use crate::core::window::ViewWindow;

/// Pixel-space geometry for one visible candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    /// Left edge of the body.
    pub x: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub body_width: f64,
    pub is_bullish: bool,
}

impl CandleGeometry {
    /// X of the wick line.
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.body_width / 2.0
    }
}

/// Projects the bars visible through `window` into candle geometry.
///
/// Bars outside the window are skipped before projection, so per-frame cost
/// is bounded by the window size, not the series length. The function is
/// pure so it can back both rendering and regression tests.
#[must_use]
pub fn project_window(bars: &[OhlcBar], window: ViewWindow, layout: FrameLayout) -> Vec<CandleGeometry> {
    window
        .slice(bars)
        .iter()
        .enumerate()
        .map(|(slot, bar)| project_single(*bar, slot, layout))
        .collect()
}

fn project_single(bar: OhlcBar, slot: usize, layout: FrameLayout) -> CandleGeometry {
    let open_y = layout.price_to_pixel(bar.open);
    let close_y = layout.price_to_pixel(bar.close);

    CandleGeometry {
        x: layout.candle_x(slot),
        body_top: open_y.min(close_y),
        body_bottom: open_y.max(close_y),
        wick_top: layout.price_to_pixel(bar.high),
        wick_bottom: layout.price_to_pixel(bar.low),
        body_width: layout.body_width(),
        is_bullish: bar.is_bullish(),
    }
}
