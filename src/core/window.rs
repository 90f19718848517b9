use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Clamp range for the number of visible bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub min_size: usize,
    pub max_size: usize,
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            min_size: 25,
            max_size: 101,
        }
    }
}

impl WindowBounds {
    pub fn validate(self) -> ChartResult<Self> {
        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(ChartError::InvalidData(
                "window bounds must satisfy 1 <= min_size <= max_size".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp(self, size: usize) -> usize {
        size.clamp(self.min_size, self.max_size)
    }
}

/// Visible window over a bar series: which contiguous slice is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub start_index: usize,
    pub window_size: usize,
}

impl ViewWindow {
    #[must_use]
    pub fn new(start_index: usize, window_size: usize) -> Self {
        Self {
            start_index,
            window_size,
        }
    }

    /// Applies one wheel step: scrolling down shrinks the window (zoom in),
    /// scrolling up grows it. Zero delta is a no-op.
    pub fn zoom_by_wheel(&mut self, delta_y: f64, bounds: WindowBounds) {
        let step: i64 = if delta_y > 0.0 {
            1
        } else if delta_y < 0.0 {
            -1
        } else {
            return;
        };
        let next = (self.window_size as i64 - step).max(0) as usize;
        self.window_size = bounds.clamp(next);
    }

    /// Shifts the window by whole bars, clamped so it never scrolls past
    /// either end of the series.
    pub fn pan_by(&mut self, delta_bars: i64, series_len: usize) {
        let max_start = series_len.saturating_sub(self.window_size) as i64;
        let next = (self.start_index as i64 + delta_bars).clamp(0, max_start);
        self.start_index = next as usize;
    }

    pub fn set_start_index(&mut self, start_index: usize, series_len: usize) {
        let max_start = series_len.saturating_sub(self.window_size);
        self.start_index = start_index.min(max_start);
    }

    /// Number of bars a series of `series_len` actually contributes.
    #[must_use]
    pub fn visible_count(self, series_len: usize) -> usize {
        series_len
            .saturating_sub(self.start_index)
            .min(self.window_size)
    }

    /// The visible slice of `items`; empty when the window starts past the end.
    #[must_use]
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = self.start_index.min(items.len());
        let end = self
            .start_index
            .saturating_add(self.window_size)
            .min(items.len());
        &items[start..end]
    }
}
