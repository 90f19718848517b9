use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Canonical OHLC observation for one discrete time unit.
///
/// The calendar date is optional; undated bars fall back to index-based
/// axis and tooltip labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcBar {
    /// Builds a validated OHLC bar from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            date: None,
            open,
            high,
            low,
            close,
        })
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Converts strongly-typed decimal input into a validated OHLC bar.
    pub fn from_decimal(
        date: Option<NaiveDate>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        let mut bar = Self::new(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )?;
        bar.date = date;
        Ok(bar)
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Ordered collection of series rendered together on one chart.
///
/// Insertion order is meaningful: the first entry is the primary series
/// (full color), later entries render as muted overlays. Updates replace the
/// whole collection; there is no incremental append contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    series: IndexMap<String, Vec<OhlcBar>>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all series wholesale.
    pub fn replace_all(&mut self, series: IndexMap<String, Vec<OhlcBar>>) {
        self.series = series;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.values().all(Vec::is_empty)
    }

    /// Number of series, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Bars of the primary (first inserted) series.
    #[must_use]
    pub fn primary(&self) -> Option<&[OhlcBar]> {
        self.series.values().next().map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[OhlcBar])> {
        self.series
            .iter()
            .map(|(id, bars)| (id.as_str(), bars.as_slice()))
    }

    /// Length of the longest series; pan clamping works against this.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }
}
