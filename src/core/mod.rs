pub mod bar;
pub mod geometry;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod window;

pub use bar::{OhlcBar, SeriesSet};
pub use geometry::{CandleGeometry, project_window};
pub use layout::{FrameLayout, MIN_BODY_WIDTH_PX};
pub use scale::{PriceScale, ScaleTuning};
pub use types::Viewport;
pub use window::{ViewWindow, WindowBounds};
