use smallvec::SmallVec;

use crate::core::primitives::format_month_day;
use crate::core::{FrameLayout, OhlcBar};
use crate::render::TextHAlign;

/// One straight stroke in pixel space (axis line or tick mark).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl AxisSegment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// One positioned axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
}

/// Axis lines, ticks, and labels for one frame.
///
/// Built from the same [`FrameLayout`] as candle geometry, so ticks and
/// candles can never drift apart through independently-rounded numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub y_axis: AxisSegment,
    pub x_axis: AxisSegment,
    /// Price-axis tick marks, one per division boundary.
    pub y_ticks: SmallVec<[AxisSegment; 12]>,
    /// Time-axis tick marks, one per visible bar.
    pub x_ticks: Vec<AxisSegment>,
    pub y_labels: SmallVec<[AxisLabel; 12]>,
    pub x_labels: Vec<AxisLabel>,
}

/// Computes axis geometry and labels for the visible window.
///
/// The price axis carries `tick_count` divisions with a label at every
/// boundary; label values run from the lowest visible low (bottom) to the
/// highest visible high (top), skipping the scale's out-of-band padding.
/// The time axis gets a tick per visible bar, a longer tick and a date
/// label every fifth bar; undated bars label with their absolute index.
#[must_use]
pub fn layout_axes(
    layout: FrameLayout,
    visible_primary: &[OhlcBar],
    window_start: usize,
    tick_count: usize,
) -> AxisLayout {
    let width = f64::from(layout.viewport().width);
    let height = f64::from(layout.viewport().height);
    let xp = layout.x_padding();
    let scale = layout.scale();

    let y_axis = AxisSegment::new(2.0 * xp, xp, 2.0 * xp, height - 2.0 * xp);
    let x_axis = AxisSegment::new(
        2.0 * xp,
        height - 2.0 * xp,
        width - 0.75 * xp,
        height - 2.0 * xp,
    );

    let mut y_ticks = SmallVec::new();
    let mut y_labels = SmallVec::new();
    let dy = (height - 3.0 * xp) / tick_count as f64;
    let price_step = (scale.span() - 3.0 * scale.padding()) / tick_count as f64;
    for i in 0..=tick_count {
        let y = height - 2.0 * xp - i as f64 * dy;
        y_ticks.push(AxisSegment::new(2.0 * xp, y, 1.75 * xp, y));

        let price = scale.min() + 2.0 * scale.padding() + i as f64 * price_step;
        y_labels.push(AxisLabel {
            text: format!("{price:.2}"),
            x: 1.5 * xp,
            y,
            h_align: TextHAlign::Right,
        });
    }

    let mut x_ticks = Vec::with_capacity(visible_primary.len());
    let mut x_labels = Vec::new();
    let baseline = height - 2.0 * xp;
    for (i, bar) in visible_primary.iter().enumerate() {
        let x = 2.5 * xp + i as f64 * layout.slot_advance();
        let tick_len = if i % 5 == 0 { 0.5 * xp } else { 0.2 * xp };
        x_ticks.push(AxisSegment::new(x, baseline, x, baseline + tick_len));

        if i % 5 == 0 {
            let text = match bar.date {
                Some(date) => format_month_day(date),
                None => (window_start + i).to_string(),
            };
            x_labels.push(AxisLabel {
                text,
                x: x - 0.1 * xp,
                y: height - xp,
                h_align: TextHAlign::Center,
            });
        }
    }

    AxisLayout {
        y_axis,
        x_axis,
        y_ticks,
        x_ticks,
        y_labels,
        x_labels,
    }
}
