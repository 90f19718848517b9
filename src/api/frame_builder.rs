use crate::core::{CandleGeometry, FrameLayout};
use crate::render::{Color, LinePrimitive, RectFill, RectPrimitive, RenderFrame, TextPrimitive};

use super::axis_layout::AxisLayout;
use super::render_style::ChartStyle;

const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Assembles the per-frame scene: candle bodies first, then wicks and axis
/// strokes, then labels. The first geometry list is the primary series;
/// the rest render muted.
#[must_use]
pub(crate) fn build_frame(
    layout: FrameLayout,
    projected: &[Vec<CandleGeometry>],
    axis: &AxisLayout,
    style: &ChartStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport());

    for (series_index, candles) in projected.iter().enumerate() {
        let (up, down) = if series_index == 0 {
            (style.up_color, style.down_color)
        } else {
            (style.muted_up_color, style.muted_down_color)
        };

        for candle in candles {
            push_candle(&mut frame, *candle, up, down, style);
        }
    }

    push_axes(&mut frame, layout, axis, style);
    frame
}

fn push_candle(
    frame: &mut RenderFrame,
    candle: CandleGeometry,
    up: Color,
    down: Color,
    style: &ChartStyle,
) {
    let color = if candle.is_bullish { up } else { down };
    let fill = if candle.is_bullish {
        RectFill::Filled
    } else {
        RectFill::Stroked {
            stroke_width: style.thin_line_width,
        }
    };

    frame.rects.push(RectPrimitive::new(
        candle.x,
        candle.body_top,
        candle.body_width,
        candle.body_bottom - candle.body_top,
        fill,
        color,
    ));

    let center = candle.center_x();
    frame.lines.push(LinePrimitive::new(
        center,
        candle.wick_top,
        center,
        candle.wick_bottom,
        style.thin_line_width,
        color,
    ));

    if style.wick_caps {
        for y in [candle.wick_top, candle.wick_bottom] {
            frame.lines.push(LinePrimitive::new(
                candle.x,
                y,
                candle.x + candle.body_width,
                y,
                style.thin_line_width,
                color,
            ));
        }
    }
}

fn push_axes(frame: &mut RenderFrame, layout: FrameLayout, axis: &AxisLayout, style: &ChartStyle) {
    for segment in [axis.y_axis, axis.x_axis]
        .into_iter()
        .chain(axis.y_ticks.iter().copied())
        .chain(axis.x_ticks.iter().copied())
    {
        frame.lines.push(LinePrimitive::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            AXIS_STROKE_WIDTH,
            style.axis_color,
        ));
    }

    let font_size = layout.font_size_px();
    for label in axis.y_labels.iter().chain(axis.x_labels.iter()) {
        frame.texts.push(TextPrimitive::new(
            label.text.clone(),
            label.x,
            label.y,
            font_size,
            style.text_color,
            label.h_align,
        ));
    }
}
