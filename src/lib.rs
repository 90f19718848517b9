//! candleview-rs: windowed candlestick chart engine.
//!
//! The crate owns chart math and scene assembly: the visible window over an
//! OHLC series, the per-frame price scale and pixel layout, candle and axis
//! geometry, and the inverse pointer mapping used for crosshair and tooltip
//! lookup. Hosts own the drawing surface and the event loop; they hand the
//! engine pixel dimensions and input deltas and receive a deterministic
//! [`render::RenderFrame`] of draw primitives plus a
//! [`interaction::HoverOverlay`] of crosshair numbers.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
