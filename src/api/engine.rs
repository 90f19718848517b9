use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{
    FrameLayout, OhlcBar, PriceScale, ScaleTuning, SeriesSet, ViewWindow, Viewport, WindowBounds,
    project_window,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CursorState, HitSample, HoverOverlay, hit_test, hover_overlay};
use crate::render::{RenderFrame, Renderer};

use super::axis_layout::layout_axes;
use super::engine_config::ChartEngineConfig;
use super::engine_snapshot::EngineSnapshot;
use super::frame_builder::build_frame;
use super::render_style::ChartStyle;

/// Chart orchestration: series state, window state, and the redraw pipeline.
///
/// Every external trigger (data replace, resize, wheel zoom, pan) funnels
/// through [`ChartEngine::render`], which recomputes scale, layout, candle
/// geometry, and axes from scratch; no frame state survives except the
/// layout of the last drawn frame, which pointer lookups reuse so crosshair
/// and tooltip stay consistent with what is actually on screen.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    series: SeriesSet,
    window: ViewWindow,
    window_bounds: WindowBounds,
    scale_tuning: ScaleTuning,
    style: ChartStyle,
    cursor: CursorState,
    last_layout: Option<FrameLayout>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let window_bounds = config.window_bounds.validate()?;
        let style = config.style.validate()?;

        let mut window = config.window;
        window.window_size = window_bounds.clamp(window.window_size);

        Ok(Self {
            renderer,
            viewport: config.viewport,
            series: SeriesSet::new(),
            window,
            window_bounds,
            scale_tuning: config.scale_tuning,
            style,
            cursor: CursorState::default(),
            last_layout: None,
        })
    }

    /// Replaces all series wholesale and redraws.
    pub fn set_series(&mut self, series: IndexMap<String, Vec<OhlcBar>>) -> ChartResult<()> {
        debug!(series_count = series.len(), "replacing series data");
        self.series.replace_all(series);
        let max_len = self.series.max_len();
        self.window.set_start_index(self.window.start_index, max_len);
        self.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.viewport = Viewport::new(width, height);
        trace!(width, height, "viewport resized");
        self.render()
    }

    /// Applies one wheel step to the window size, clamped to the configured
    /// bounds, and redraws.
    pub fn wheel_zoom(&mut self, delta_y: f64) -> ChartResult<()> {
        self.window.zoom_by_wheel(delta_y, self.window_bounds);
        self.render()
    }

    pub fn pan_by(&mut self, delta_bars: i64) -> ChartResult<()> {
        self.window.pan_by(delta_bars, self.series.max_len());
        self.render()
    }

    pub fn set_start_index(&mut self, start_index: usize) -> ChartResult<()> {
        self.window.set_start_index(start_index, self.series.max_len());
        self.render()
    }

    /// Recomputes the frame pipeline and issues draw calls.
    ///
    /// An empty visible window degrades to a blank frame and a zero-area
    /// viewport skips drawing entirely; neither is fatal, and the next
    /// trigger retries from fresh inputs.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            trace!("zero-area viewport, skipping frame");
            self.last_layout = None;
            return Ok(());
        }

        let scale = match PriceScale::fit_visible(&self.series, self.window, self.scale_tuning) {
            Ok(scale) => scale,
            Err(ChartError::InsufficientData { .. }) => {
                debug!(
                    start_index = self.window.start_index,
                    window_size = self.window.window_size,
                    "no visible bars, drawing blank frame"
                );
                self.last_layout = None;
                return self.renderer.render(&RenderFrame::new(self.viewport));
            }
            Err(err) => return Err(err),
        };

        let layout =
            FrameLayout::compute(self.viewport, scale, self.window.window_size, self.style.spacing_px)?;

        let projected: Vec<_> = self
            .series
            .iter()
            .map(|(_, bars)| project_window(bars, self.window, layout))
            .collect();

        let visible_primary = self
            .series
            .primary()
            .map(|bars| self.window.slice(bars))
            .unwrap_or(&[]);
        let axis = layout_axes(
            layout,
            visible_primary,
            self.window.start_index,
            self.style.tick_count,
        );

        let frame = build_frame(layout, &projected, &axis, &self.style);
        self.last_layout = Some(layout);
        trace!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "frame assembled"
        );
        self.renderer.render(&frame)
    }

    /// Pointer lookup against the last drawn frame.
    ///
    /// Returns `None` over the margins or before the first frame; the host
    /// hides crosshair and tooltip in that case. The base scene is not
    /// redrawn.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<HoverOverlay> {
        self.cursor.on_pointer_move(x, y);

        let overlay = match self.last_layout {
            Some(layout) => hit_test(x, y, layout, self.window, &self.series)
                .map(|hit| hover_overlay(&hit, y, layout, self.style.tooltip_width_px)),
            None => None,
        };

        self.cursor.set_overlay(overlay.clone());
        overlay
    }

    pub fn pointer_leave(&mut self) {
        self.cursor.on_pointer_leave();
    }

    /// Raw hit lookup without overlay assembly.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitSample> {
        self.last_layout
            .and_then(|layout| hit_test(x, y, layout, self.window, &self.series))
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn window_bounds(&self) -> WindowBounds {
        self.window_bounds
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Layout of the last drawn frame, if any frame has been drawn.
    #[must_use]
    pub fn last_layout(&self) -> Option<FrameLayout> {
        self.last_layout
    }

    /// Deterministic serializable state for regression tests and debugging.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let primary_geometry = match (self.last_layout, self.series.primary()) {
            (Some(layout), Some(bars)) => project_window(bars, self.window, layout),
            _ => Vec::new(),
        };

        EngineSnapshot {
            viewport: self.viewport,
            window: self.window,
            layout: self.last_layout,
            series_lengths: self
                .series
                .iter()
                .map(|(id, bars)| (id.to_owned(), bars.len()))
                .collect(),
            primary_geometry,
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
