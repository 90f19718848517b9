pub mod axis_layout;
mod engine;
mod engine_config;
mod engine_snapshot;
mod frame_builder;
mod render_style;

pub use axis_layout::{AxisLabel, AxisLayout, AxisSegment, layout_axes};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use render_style::ChartStyle;
