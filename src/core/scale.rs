use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::bar::SeriesSet;
use crate::core::window::ViewWindow;
use crate::error::{ChartError, ChartResult};

/// Tuning controls for vertical autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTuning {
    /// Fraction of the visible high-low range used as padding.
    pub padding_portion: f64,
    /// Padding substituted when the visible range collapses to a point.
    pub min_padding_absolute: f64,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            padding_portion: 0.05,
            min_padding_absolute: 1.0,
        }
    }
}

impl ScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.padding_portion.is_finite() || self.padding_portion < 0.0 {
            return Err(ChartError::InvalidData(
                "scale padding portion must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_padding_absolute.is_finite() || self.min_padding_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale min padding must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Vertical price domain for the currently visible window.
///
/// Recomputed on every frame from visible bars only; never carried across
/// frames. Padding is asymmetric: two paddings below the lowest low, one
/// above the highest high, reserving extra room under the price action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    min: f64,
    max: f64,
    padding: f64,
}

impl PriceScale {
    pub fn new(min: f64, max: f64, padding: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || !padding.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "price scale domain must be finite with min < max".to_owned(),
            ));
        }

        Ok(Self { min, max, padding })
    }

    /// Fits the scale to the bars visible through `window` across all series.
    pub fn fit_visible(
        series: &SeriesSet,
        window: ViewWindow,
        tuning: ScaleTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;

        let mut visible = 0usize;
        let mut min_low = OrderedFloat(f64::INFINITY);
        let mut max_high = OrderedFloat(f64::NEG_INFINITY);

        for (_, bars) in series.iter() {
            for bar in window.slice(bars) {
                min_low = min_low.min(OrderedFloat(bar.low));
                max_high = max_high.max(OrderedFloat(bar.high));
                visible += 1;
            }
        }

        if visible == 0 {
            return Err(ChartError::InsufficientData {
                start_index: window.start_index,
                window_size: window.window_size,
            });
        }

        let (min_low, max_high) = (min_low.into_inner(), max_high.into_inner());
        let mut padding = (max_high - min_low) * tuning.padding_portion;
        if padding <= 0.0 {
            padding = tuning.min_padding_absolute;
        }

        Ok(Self {
            min: min_low - 2.0 * padding,
            max: max_high + padding,
            padding,
        })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn padding(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}
