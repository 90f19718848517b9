use serde::{Deserialize, Serialize};

use crate::core::primitives::format_month_day;
use crate::core::{FrameLayout, OhlcBar, SeriesSet, ViewWindow};

/// One successful pointer lookup against the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitSample {
    /// Slot within the visible window, `0..window_size`.
    pub index_in_window: usize,
    /// Absolute index into the primary series.
    pub series_index: usize,
    pub bar: OhlcBar,
    /// Price under the pointer's Y coordinate.
    pub price: f64,
}

/// Everything the host needs to position the crosshair and tooltip.
///
/// The engine computes numbers only; whether the overlay becomes positioned
/// elements, a second canvas layer, or an immediate-mode pass is the host's
/// choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverOverlay {
    /// Vertical guide line X, snapped to the hit bar's center.
    pub crosshair_x: f64,
    pub crosshair_top: f64,
    pub crosshair_bottom: f64,
    /// Horizontal guide line Y, following the raw pointer.
    pub pointer_y: f64,
    pub tooltip_text: String,
    pub tooltip_x: f64,
    pub tooltip_y: f64,
}

/// Maps a pixel position back to a bar slot and price.
///
/// This is the mathematical inverse of the forward candle geometry and must
/// be fed the same [`FrameLayout`] that produced the drawn frame. Returns
/// `None` over the margins or when the window overhangs the series end - a
/// normal outcome, not an error.
#[must_use]
pub fn hit_test(
    pixel_x: f64,
    pixel_y: f64,
    layout: FrameLayout,
    window: ViewWindow,
    series: &SeriesSet,
) -> Option<HitSample> {
    let slot = layout.slot_at(pixel_x);
    if slot < 0 || slot as usize >= window.window_size {
        return None;
    }
    let slot = slot as usize;
    let bar = *window.slice(series.primary()?).get(slot)?;

    Some(HitSample {
        index_in_window: slot,
        series_index: window.start_index + slot,
        bar,
        price: layout.pixel_to_price(pixel_y),
    })
}

/// Builds the overlay for a hit, flipping the tooltip to whichever side of
/// the crosshair has room.
#[must_use]
pub fn hover_overlay(
    hit: &HitSample,
    pointer_y: f64,
    layout: FrameLayout,
    tooltip_width_px: f64,
) -> HoverOverlay {
    let width = f64::from(layout.viewport().width);
    let height = f64::from(layout.viewport().height);

    // Snap to the bar center; the trailing -2 keeps the guide aligned with
    // the drawn candle rather than the slot boundary.
    let crosshair_x = (hit.index_in_window as f64 + 0.5) * layout.slot_advance()
        + 2.0 * layout.x_padding()
        - 2.0;

    let space_right = width - crosshair_x;
    let tooltip_x = if space_right < tooltip_width_px + 10.0 {
        crosshair_x - tooltip_width_px - 5.0
    } else {
        crosshair_x + 5.0
    };

    let date_text = match hit.bar.date {
        Some(date) => format_month_day(date),
        None => hit.series_index.to_string(),
    };

    HoverOverlay {
        crosshair_x,
        crosshair_top: layout.x_padding(),
        crosshair_bottom: height - 2.0 * layout.x_padding(),
        pointer_y,
        tooltip_text: format!("Date: {date_text}\nPrice: {price:.2}", price = hit.price),
        tooltip_x,
        tooltip_y: pointer_y - 20.0,
    }
}

/// Pointer-tracking state retained between frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CursorState {
    visible: bool,
    x: f64,
    y: f64,
    overlay: Option<HoverOverlay>,
}

impl CursorState {
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.visible = true;
        self.x = x;
        self.y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.visible = false;
        self.overlay = None;
    }

    pub fn set_overlay(&mut self, overlay: Option<HoverOverlay>) {
        self.overlay = overlay;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&HoverOverlay> {
        self.overlay.as_ref()
    }
}
