use serde::{Deserialize, Serialize};

use crate::core::scale::PriceScale;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Candle bodies never shrink below this width.
pub const MIN_BODY_WIDTH_PX: f64 = 2.0;

/// Per-frame pixel layout shared by candle geometry, axes, and hit-testing.
///
/// Every derived quantity is a pure function of the inputs. The layout is
/// rebuilt whenever viewport, scale, or window size changes, so candles,
/// ticks, and pointer lookups always read the same numbers; computing any of
/// them from independently-rounded copies would let them drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameLayout {
    viewport: Viewport,
    scale: PriceScale,
    window_size: usize,
    spacing_px: f64,
    alpha: f64,
    x_padding: f64,
    body_width: f64,
}

impl FrameLayout {
    pub fn compute(
        viewport: Viewport,
        scale: PriceScale,
        window_size: usize,
        spacing_px: f64,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if window_size == 0 {
            return Err(ChartError::InvalidData(
                "window size must be > 0".to_owned(),
            ));
        }

        if !spacing_px.is_finite() || spacing_px < 0.0 {
            return Err(ChartError::InvalidData(
                "candle spacing must be finite and >= 0".to_owned(),
            ));
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let alpha = height / scale.span();
        let x_padding = scale.padding() * alpha;
        let body_width = ((width - 3.0 * x_padding - (window_size as f64 - 1.0) * spacing_px)
            / window_size as f64)
            .max(MIN_BODY_WIDTH_PX);

        Ok(Self {
            viewport,
            scale,
            window_size,
            spacing_px,
            alpha,
            x_padding,
            body_width,
        })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scale(self) -> PriceScale {
        self.scale
    }

    #[must_use]
    pub fn window_size(self) -> usize {
        self.window_size
    }

    #[must_use]
    pub fn spacing_px(self) -> f64 {
        self.spacing_px
    }

    /// Pixels per price unit.
    #[must_use]
    pub fn alpha(self) -> f64 {
        self.alpha
    }

    /// Chart margin in pixels; the vertical padding value mapped through
    /// `alpha` so horizontal margins visually match the vertical ones.
    #[must_use]
    pub fn x_padding(self) -> f64 {
        self.x_padding
    }

    #[must_use]
    pub fn body_width(self) -> f64 {
        self.body_width
    }

    /// Horizontal distance between consecutive bar slots.
    #[must_use]
    pub fn slot_advance(self) -> f64 {
        self.body_width + self.spacing_px
    }

    /// Maps a price to a Y pixel; larger prices sit higher on screen.
    #[must_use]
    pub fn price_to_pixel(self, price: f64) -> f64 {
        (self.scale.max() - price) * self.alpha
    }

    /// Exact inverse of [`FrameLayout::price_to_pixel`].
    #[must_use]
    pub fn pixel_to_price(self, pixel_y: f64) -> f64 {
        (f64::from(self.viewport.height) - pixel_y) / self.alpha + self.scale.min()
    }

    /// Left edge of the candle body in window slot `slot`.
    #[must_use]
    pub fn candle_x(self, slot: usize) -> f64 {
        slot as f64 * self.slot_advance() + 2.0 * self.x_padding
    }

    #[must_use]
    pub fn candle_center_x(self, slot: usize) -> f64 {
        self.candle_x(slot) + self.body_width / 2.0
    }

    /// Window slot under a pixel X; may fall outside `0..window_size`.
    #[must_use]
    pub fn slot_at(self, pixel_x: f64) -> i64 {
        ((pixel_x - 2.0 * self.x_padding) / self.slot_advance()).floor() as i64
    }

    /// Adaptive label font size.
    #[must_use]
    pub fn font_size_px(self) -> f64 {
        (f64::from(self.viewport.height) * 0.02).max(10.0)
    }
}
